// fcra-core/src/application/testing.rs

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::record::{FieldUpdate, FieldValue, NewRecord, Record, RecordField};
use crate::error::FcraError;
use crate::ports::{PortfolioFilter, RecordStore};

/// In-process store for service tests.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Record>>,
    next_id: Mutex<i64>,
}

impl MemoryStore {
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            records: Mutex::new(records),
            next_id: Mutex::new(next_id),
        }
    }

    fn snapshot(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

fn set_field(record: &mut Record, field: RecordField, value: &FieldValue) {
    let text = match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Integer(n) => n.to_string(),
    };
    match field {
        RecordField::AcctNumber => record.acct_number = text.parse().unwrap(),
        RecordField::Aging => record.aging = text.parse().unwrap(),
        RecordField::Portfolio => record.portfolio = text,
        RecordField::RuleId => record.rule_id = text,
        RecordField::RuleCategory => record.rule_category = text,
        RecordField::Severity => record.severity = text,
        RecordField::DqsStatus => record.dqs_status = text,
        RecordField::DateOfInfo => record.date_of_info = text,
        RecordField::ProcessDate => record.process_date = text,
        RecordField::RemediationStatus => record.remediation_status = text,
        RecordField::ActionTakenBy => record.action_taken_by = text,
        RecordField::ActionNotes => record.action_notes = text,
        RecordField::ActionDate => record.action_date = text,
        RecordField::AssignedTo => record.assigned_to = text,
        RecordField::RemediationCategory => record.remediation_category = text,
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn replace_all(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError> {
        let mut next_id = self.next_id.lock().unwrap();
        let mut records = self.records.lock().unwrap();
        records.clear();
        for row in rows {
            *next_id += 1;
            records.push(row.with_id(*next_id));
        }
        Ok(records.len())
    }

    async fn append(&self, rows: Vec<NewRecord>) -> Result<usize, FcraError> {
        let mut next_id = self.next_id.lock().unwrap();
        let mut records = self.records.lock().unwrap();
        let count = rows.len();
        for row in rows {
            *next_id += 1;
            records.push(row.with_id(*next_id));
        }
        Ok(count)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, FcraError> {
        Ok(self.snapshot().into_iter().find(|r| r.id == id))
    }

    async fn all_records(&self) -> Result<Vec<Record>, FcraError> {
        Ok(self.snapshot())
    }

    async fn find_by_portfolio(&self, filter: &PortfolioFilter) -> Result<Vec<Record>, FcraError> {
        Ok(self
            .snapshot()
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    async fn update_field(&self, id: i64, update: &FieldUpdate) -> Result<usize, FcraError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(0);
        };
        set_field(record, update.field, &update.value);
        if let Some(stamp) = &update.action_date {
            record.action_date = stamp.clone();
        }
        Ok(1)
    }

    async fn distinct_values(
        &self,
        field: RecordField,
        portfolio: &str,
    ) -> Result<Vec<String>, FcraError> {
        let mut values: Vec<String> = self
            .snapshot()
            .into_iter()
            .filter(|r| r.portfolio == portfolio)
            .map(|r| match field {
                RecordField::RemediationStatus => r.remediation_status,
                RecordField::RemediationCategory => r.remediation_category,
                other => panic!("distinct values not supported for {}", other),
            })
            .filter(|v| !v.is_empty())
            .collect();
        values.sort();
        values.dedup();
        Ok(values)
    }

    fn engine_name(&self) -> &str {
        "memory"
    }
}
