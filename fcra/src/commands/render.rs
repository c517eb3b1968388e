// fcra/src/commands/render.rs
//
// Terminal rendering of the shared tabular model.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell as TermCell, CellAlignment, ContentArrangement, Table as TermTable};
use serde::Serialize;

use fcra_core::domain::table::{Cell, Table};

pub fn table(table: &Table) -> String {
    let mut out = TermTable::new();
    out.load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(table.headers.iter().map(TermCell::new));

    for row in &table.rows {
        out.add_row(row.iter().map(|cell| match cell {
            Cell::Text(_) => TermCell::new(cell.display()),
            Cell::Integer(_) => TermCell::new(cell.display()).set_alignment(CellAlignment::Right),
        }));
    }
    out.to_string()
}

/// Two-column layout for a handful of named values.
pub fn key_values<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> String {
    let mut out = TermTable::new();
    out.load_preset(UTF8_FULL);
    for (key, value) in pairs {
        out.add_row(vec![
            TermCell::new(key),
            TermCell::new(value).set_alignment(CellAlignment::Right),
        ]);
    }
    out.to_string()
}

pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
