// fcra-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Field '{0}' cannot be updated")]
    #[diagnostic(
        code(fcra::domain::unknown_field),
        help(
            "Mutable fields: acct_number, portfolio, rule_id, rule_category, severity, dqs_status, \
             date_of_info, aging, process_date, remediation_status, action_taken_by, action_notes, \
             action_date, assigned_to, remediation_category."
        )
    )]
    UnknownField(String),

    #[error("Invalid value '{value}' for field '{field}': expected an integer")]
    #[diagnostic(code(fcra::domain::invalid_value))]
    InvalidFieldValue { field: String, value: String },

    #[error("Unknown trend metric '{0}'")]
    #[diagnostic(
        code(fcra::domain::unknown_metric),
        help("Use one of: instances, exceptions, remediation, lob.")
    )]
    UnknownMetric(String),

    #[error("Unknown export target '{0}'")]
    #[diagnostic(
        code(fcra::domain::unknown_export_target),
        help("Use 'summary' or a portfolio: Credit Cards, TDAF, Consumer.")
    )]
    UnknownExportTarget(String),
}
