// fcra/src/commands/import.rs
//
// USE CASE: Replace the stored records with a CSV file.

use anyhow::Context;
use std::path::PathBuf;

use fcra_core::application::import_records;

use super::AppContext;

pub async fn execute(ctx: &AppContext, csv: Option<PathBuf>) -> anyhow::Result<()> {
    let path = csv.unwrap_or_else(|| PathBuf::from(&ctx.config.csv_path));
    println!("📥 Importing '{}'...", path.display());

    let report = import_records(ctx.store(), &path)
        .await
        .with_context(|| format!("Import of {} failed", path.display()))?;

    for rejected in &report.rejected {
        eprintln!("   ⚠️  line {}: {}", rejected.line, rejected.reason);
    }
    println!(
        "✨ Imported {} records ({} without account number, {} rejected)",
        report.imported,
        report.skipped_blank,
        report.rejected.len()
    );
    Ok(())
}
