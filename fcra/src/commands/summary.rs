// fcra/src/commands/summary.rs
//
// USE CASE: Summary table (default) or summary cards (--json).

use fcra_core::domain::table::summary_table_sheet;

use super::{AppContext, render};

pub async fn execute(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    if json {
        let stats = ctx.service.summary_stats().await?;
        println!("{}", render::json(&stats)?);
    } else {
        let rows = ctx.service.summary_table().await?;
        println!("{}", render::table(&summary_table_sheet(&rows)));
    }
    Ok(())
}
