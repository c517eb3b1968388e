// fcra/src/commands/export.rs
//
// USE CASE: Write an .xlsx export to disk.

use std::path::PathBuf;

use fcra_core::application::{ExportTarget, export};
use fcra_core::infrastructure::export::XlsxWriter;
use fcra_core::infrastructure::fs::save_export;

use super::AppContext;

pub async fn execute(ctx: &AppContext, target: &str, output: Option<PathBuf>) -> anyhow::Result<()> {
    let target: ExportTarget = target.parse()?;
    let dir = output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_dir));

    let document = export(&ctx.service, &XlsxWriter::new(), target).await?;
    let path = save_export(&dir, &document.file_name, &document.bytes)?;

    println!("💾 Export written to {}", path.display());
    Ok(())
}
