// fcra/src/commands/records.rs
//
// USE CASE: List the records of one portfolio, optionally filtered.

use fcra_core::domain::record::Record;
use fcra_core::domain::table::{Cell, Table, records_sheet};

use super::{AppContext, render};

pub async fn execute(
    ctx: &AppContext,
    name: &str,
    status: Option<&str>,
    category: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let records = ctx.service.portfolio_records(name, status, category).await?;
    if json {
        println!("{}", render::json(&records)?);
        return Ok(());
    }

    println!("{}", render::table(&with_ids(&records)));
    println!("{} records", records.len());
    Ok(())
}

/// The export layout with a leading `id` column, needed to target `update`.
fn with_ids(records: &[Record]) -> Table {
    let sheet = records_sheet(records);
    let mut table = Table::new(std::iter::once("id".to_string()).chain(sheet.headers));
    for (record, row) in records.iter().zip(sheet.rows) {
        let mut cells = Vec::with_capacity(row.len() + 1);
        cells.push(Cell::from(record.id));
        cells.extend(row);
        table.push_row(cells);
    }
    table
}
