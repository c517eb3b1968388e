// fcra-core/src/domain/table.rs

//! Tabular documents shared by the spreadsheet export and the CLI.

use crate::domain::record::{Record, RecordField};
use crate::domain::reporting::SummaryRow;

/// Worksheet name used by every export.
pub const SHEET_NAME: &str = "Data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
}

impl Cell {
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Cell::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Integer(n)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            sheet_name: SHEET_NAME.to_string(),
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }
}

const SUMMARY_HEADERS: [&str; 8] = [
    "portfolio",
    "instances",
    "exceptions",
    "remediation_incomplete",
    "lob_incomplete",
    "internal_incomplete",
    "technology_incomplete",
    "ninety_days_incomplete",
];

/// Summary table rows, `Overall` first, as produced by `summary_table`.
pub fn summary_table_sheet(rows: &[SummaryRow]) -> Table {
    let mut table = Table::new(SUMMARY_HEADERS);
    for row in rows {
        table.push_row(vec![
            row.portfolio.as_str().into(),
            row.instances.into(),
            row.exceptions.into(),
            row.remediation_incomplete.into(),
            row.lob_incomplete.into(),
            row.internal_incomplete.into(),
            row.technology_incomplete.into(),
            row.ninety_days_incomplete.into(),
        ]);
    }
    table
}

/// Raw records in stored column order, without the id.
pub fn records_sheet(records: &[Record]) -> Table {
    let mut table = Table::new(RecordField::ALL.iter().map(|f| f.column_name()));
    for record in records {
        table.push_row(
            RecordField::ALL
                .iter()
                .map(|field| record_cell(record, *field))
                .collect(),
        );
    }
    table
}

fn record_cell(record: &Record, field: RecordField) -> Cell {
    match field {
        RecordField::AcctNumber => record.acct_number.into(),
        RecordField::Portfolio => record.portfolio.as_str().into(),
        RecordField::RuleId => record.rule_id.as_str().into(),
        RecordField::RuleCategory => record.rule_category.as_str().into(),
        RecordField::Severity => record.severity.as_str().into(),
        RecordField::DqsStatus => record.dqs_status.as_str().into(),
        RecordField::DateOfInfo => record.date_of_info.as_str().into(),
        RecordField::Aging => record.aging.into(),
        RecordField::ProcessDate => record.process_date.as_str().into(),
        RecordField::RemediationStatus => record.remediation_status.as_str().into(),
        RecordField::ActionTakenBy => record.action_taken_by.as_str().into(),
        RecordField::ActionNotes => record.action_notes.as_str().into(),
        RecordField::ActionDate => record.action_date.as_str().into(),
        RecordField::AssignedTo => record.assigned_to.as_str().into(),
        RecordField::RemediationCategory => record.remediation_category.as_str().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::model::fixtures::record;
    use crate::domain::reporting::summary_table;

    #[test]
    fn test_records_sheet_column_order() {
        let mut rec = record(7, "Consumers", "Incomplete", "Technology");
        rec.aging = 60;
        let table = records_sheet(&[rec]);

        assert_eq!(table.headers.len(), 15);
        assert_eq!(table.headers[0], "acct_number");
        assert_eq!(table.headers[7], "aging");
        assert_eq!(table.headers[14], "remediation_category");

        let row = &table.rows[0];
        assert_eq!(row[0], Cell::Integer(100_007));
        assert_eq!(row[1], Cell::Text("Consumers".into()));
        assert_eq!(row[7], Cell::Integer(60));
        assert_eq!(row[14], Cell::Text("Technology".into()));
    }

    #[test]
    fn test_summary_sheet_starts_with_overall() {
        let records = vec![record(1, "TDAF", "Incomplete", "Internal")];
        let table = summary_table_sheet(&summary_table(&records));

        assert_eq!(table.sheet_name, "Data");
        assert_eq!(table.rows.len(), 4);
        assert_eq!(table.rows[0][0], Cell::Text("Overall".into()));
        assert_eq!(table.rows[2][0], Cell::Text("TDAF".into()));
        assert_eq!(table.rows[2][5], Cell::Integer(1));
    }
}
