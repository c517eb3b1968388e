// fcra/src/commands/seed.rs
//
// USE CASE: Add demo records on top of the stored ones.

use fcra_core::application::seed_demo_records;

use super::AppContext;

pub async fn execute(ctx: &AppContext) -> anyhow::Result<()> {
    let inserted = seed_demo_records(ctx.store()).await?;
    println!("🌱 Added {} demo records", inserted);
    Ok(())
}
