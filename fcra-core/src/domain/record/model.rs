// fcra-core/src/domain/record/model.rs

use serde::{Deserialize, Serialize};

use super::portfolio::Portfolio;
use super::taxonomy::{RemediationCategory, RemediationStatus};

/// Status value that marks a record as "not an exception".
const NONEXCEPTIONS: &str = "Nonexceptions";

/// Aging threshold for the "90 days incomplete" column.
pub const NINETY_DAYS: i64 = 90;

/// One remediation exception instance, as persisted.
///
/// Text fields hold the stored value verbatim (no enum coercion) so that
/// unexpected source values survive a round trip and simply fall outside
/// every named bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub acct_number: i64,
    pub portfolio: String,
    pub rule_id: String,
    pub rule_category: String,
    pub severity: String,
    pub dqs_status: String,
    pub date_of_info: String,
    pub aging: i64,
    pub process_date: String,
    pub remediation_status: String,
    pub action_taken_by: String,
    pub action_notes: String,
    pub action_date: String,
    pub assigned_to: String,
    pub remediation_category: String,
}

/// A record prior to insertion: everything but the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub acct_number: i64,
    pub portfolio: String,
    pub rule_id: String,
    pub rule_category: String,
    pub severity: String,
    pub dqs_status: String,
    pub date_of_info: String,
    pub aging: i64,
    pub process_date: String,
    pub remediation_status: String,
    pub action_taken_by: String,
    pub action_notes: String,
    pub action_date: String,
    pub assigned_to: String,
    pub remediation_category: String,
}

impl NewRecord {
    pub fn with_id(self, id: i64) -> Record {
        Record {
            id,
            acct_number: self.acct_number,
            portfolio: self.portfolio,
            rule_id: self.rule_id,
            rule_category: self.rule_category,
            severity: self.severity,
            dqs_status: self.dqs_status,
            date_of_info: self.date_of_info,
            aging: self.aging,
            process_date: self.process_date,
            remediation_status: self.remediation_status,
            action_taken_by: self.action_taken_by,
            action_notes: self.action_notes,
            action_date: self.action_date,
            assigned_to: self.assigned_to,
            remediation_category: self.remediation_category,
        }
    }
}

impl Record {
    pub fn portfolio(&self) -> Option<Portfolio> {
        Portfolio::from_storage(&self.portfolio)
    }

    pub fn status(&self) -> Option<RemediationStatus> {
        self.remediation_status.parse().ok()
    }

    pub fn category(&self) -> Option<RemediationCategory> {
        self.remediation_category.parse().ok()
    }

    /// Anything that is not `Nonexceptions` is an exception, `Resolved`
    /// and unrecognised statuses included.
    pub fn is_exception(&self) -> bool {
        self.remediation_status != NONEXCEPTIONS
    }

    pub fn is_incomplete(&self) -> bool {
        self.status() == Some(RemediationStatus::Incomplete)
    }

    /// Incomplete and blocked on the given category.
    pub fn is_incomplete_in(&self, category: RemediationCategory) -> bool {
        self.is_incomplete() && self.category() == Some(category)
    }

    pub fn is_aged_incomplete(&self) -> bool {
        self.is_incomplete() && self.aging >= NINETY_DAYS
    }
}
