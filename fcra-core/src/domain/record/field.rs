// fcra-core/src/domain/record/field.rs

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::domain::dates::format_action_date;
use crate::domain::error::DomainError;

/// Closed set of columns a caller may write. `id` is deliberately absent.
///
/// Column names come from [`RecordField::column_name`], never from caller
/// input, so they can be spliced into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    AcctNumber,
    Portfolio,
    RuleId,
    RuleCategory,
    Severity,
    DqsStatus,
    DateOfInfo,
    Aging,
    ProcessDate,
    RemediationStatus,
    ActionTakenBy,
    ActionNotes,
    ActionDate,
    AssignedTo,
    RemediationCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

impl RecordField {
    /// Stored column order, which is also the export column order.
    pub const ALL: [RecordField; 15] = [
        RecordField::AcctNumber,
        RecordField::Portfolio,
        RecordField::RuleId,
        RecordField::RuleCategory,
        RecordField::Severity,
        RecordField::DqsStatus,
        RecordField::DateOfInfo,
        RecordField::Aging,
        RecordField::ProcessDate,
        RecordField::RemediationStatus,
        RecordField::ActionTakenBy,
        RecordField::ActionNotes,
        RecordField::ActionDate,
        RecordField::AssignedTo,
        RecordField::RemediationCategory,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            Self::AcctNumber => "acct_number",
            Self::Portfolio => "portfolio",
            Self::RuleId => "rule_id",
            Self::RuleCategory => "rule_category",
            Self::Severity => "severity",
            Self::DqsStatus => "dqs_status",
            Self::DateOfInfo => "date_of_info",
            Self::Aging => "aging",
            Self::ProcessDate => "process_date",
            Self::RemediationStatus => "remediation_status",
            Self::ActionTakenBy => "action_taken_by",
            Self::ActionNotes => "action_notes",
            Self::ActionDate => "action_date",
            Self::AssignedTo => "assigned_to",
            Self::RemediationCategory => "remediation_category",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::AcctNumber | Self::Aging => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }

    /// Workflow columns where the source file writes `None` for "empty".
    pub fn is_workflow(&self) -> bool {
        matches!(
            self,
            Self::ActionTakenBy
                | Self::ActionNotes
                | Self::ActionDate
                | Self::AssignedTo
                | Self::RemediationCategory
        )
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}

impl FromStr for RecordField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.column_name() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

/// A validated single-field write.
///
/// Writing `action_notes` carries the `action_date` stamp along with it; the
/// store must apply both in the same statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUpdate {
    pub field: RecordField,
    pub value: FieldValue,
    pub action_date: Option<String>,
}

impl FieldUpdate {
    pub fn new(field: RecordField, raw: &str, today: NaiveDate) -> Result<Self, DomainError> {
        let value = match field.kind() {
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::Integer => {
                let parsed = raw.trim().parse::<i64>().map_err(|_| {
                    DomainError::InvalidFieldValue {
                        field: field.column_name().to_string(),
                        value: raw.to_string(),
                    }
                })?;
                FieldValue::Integer(parsed)
            }
        };

        let action_date =
            (field == RecordField::ActionNotes).then(|| format_action_date(today));

        Ok(Self {
            field,
            value,
            action_date,
        })
    }
}
