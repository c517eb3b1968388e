// fcra-core/src/infrastructure/ingest/csv.rs

use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, instrument, warn};

use crate::domain::record::{NewRecord, RecordField};
use crate::infrastructure::error::InfrastructureError;

/// Source files write the literal `None` for empty workflow cells.
const NONE_LITERAL: &str = "None";

/// A data row that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line in the source file.
    pub line: u64,
    pub reason: String,
}

/// Output of one pass over a CSV file.
#[derive(Debug, Default)]
pub struct CsvBatch {
    pub rows: Vec<NewRecord>,
    /// Rows without an account number, dropped silently.
    pub skipped_blank: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Case-, whitespace- and underscore-insensitive header key.
fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Maps a source header to its field. Accepts the export's headers
/// (including its `Serverity` misspelling) and snake_case column names.
pub fn field_for_header(header: &str) -> Option<RecordField> {
    let field = match normalize_header(header).as_str() {
        "acct number" | "account number" => RecordField::AcctNumber,
        "portfolio" => RecordField::Portfolio,
        "rule id" => RecordField::RuleId,
        "rule category" => RecordField::RuleCategory,
        "severity" | "serverity" => RecordField::Severity,
        "dqs status" => RecordField::DqsStatus,
        "date of info" => RecordField::DateOfInfo,
        "aging" => RecordField::Aging,
        "process date" => RecordField::ProcessDate,
        "remediation status" => RecordField::RemediationStatus,
        "action taken by" => RecordField::ActionTakenBy,
        "action notes" => RecordField::ActionNotes,
        "action date" => RecordField::ActionDate,
        "assigned to" => RecordField::AssignedTo,
        "remediation category" => RecordField::RemediationCategory,
        _ => return None,
    };
    Some(field)
}

struct ColumnMap {
    index: HashMap<RecordField, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut index = HashMap::new();
        for (i, header) in headers.iter().enumerate() {
            match field_for_header(header) {
                // Later duplicates win.
                Some(field) => {
                    index.insert(field, i);
                }
                None => debug!(header, "Ignoring unknown CSV column"),
            }
        }
        Self { index }
    }

    fn value<'r>(&self, record: &'r StringRecord, field: RecordField) -> &'r str {
        let raw = self
            .index
            .get(&field)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .trim();
        if field.is_workflow() && raw == NONE_LITERAL {
            ""
        } else {
            raw
        }
    }
}

enum RowOutcome {
    Parsed(NewRecord),
    Blank,
    Rejected(String),
}

fn convert_row(columns: &ColumnMap, record: &StringRecord) -> RowOutcome {
    let text = |field| columns.value(record, field).to_string();

    let acct = columns.value(record, RecordField::AcctNumber);
    if acct.is_empty() {
        return RowOutcome::Blank;
    }
    let acct_number = match acct.parse::<i64>() {
        Ok(n) => n,
        Err(e) => return RowOutcome::Rejected(format!("invalid acct number '{}': {}", acct, e)),
    };

    let aging_raw = columns.value(record, RecordField::Aging);
    let aging = if aging_raw.is_empty() {
        0
    } else {
        match aging_raw.parse::<i64>() {
            Ok(n) => n,
            Err(e) => return RowOutcome::Rejected(format!("invalid aging '{}': {}", aging_raw, e)),
        }
    };

    RowOutcome::Parsed(NewRecord {
        acct_number,
        portfolio: text(RecordField::Portfolio),
        rule_id: text(RecordField::RuleId),
        rule_category: text(RecordField::RuleCategory),
        severity: text(RecordField::Severity),
        dqs_status: text(RecordField::DqsStatus),
        date_of_info: text(RecordField::DateOfInfo),
        aging,
        process_date: text(RecordField::ProcessDate),
        remediation_status: text(RecordField::RemediationStatus),
        action_taken_by: text(RecordField::ActionTakenBy),
        action_notes: text(RecordField::ActionNotes),
        action_date: text(RecordField::ActionDate),
        assigned_to: text(RecordField::AssignedTo),
        remediation_category: text(RecordField::RemediationCategory),
    })
}

/// Reads FCRA rows from any CSV source with a header row.
///
/// Row-level problems never abort the pass: blank account numbers are
/// counted, unparseable numbers and undecodable rows are collected in
/// `rejected`. Only I/O failures are returned as errors.
pub fn read_records<R: Read>(reader: R) -> Result<CsvBatch, InfrastructureError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = ColumnMap::from_headers(csv_reader.headers()?);
    if !columns.index.contains_key(&RecordField::AcctNumber) {
        warn!("CSV has no account number column; every row will be skipped");
    }

    let mut batch = CsvBatch::default();
    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!(line, error = %e, "Dropping unreadable CSV row");
                batch.rejected.push(RejectedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        match convert_row(&columns, &record) {
            RowOutcome::Parsed(row) => batch.rows.push(row),
            RowOutcome::Blank => batch.skipped_blank += 1,
            RowOutcome::Rejected(reason) => {
                warn!(line, %reason, "Dropping CSV row");
                batch.rejected.push(RejectedRow { line, reason });
            }
        }
    }

    Ok(batch)
}

#[instrument]
pub fn read_records_from_path(path: &Path) -> Result<CsvBatch, InfrastructureError> {
    let file = std::fs::File::open(path)?;
    read_records(file)
}
