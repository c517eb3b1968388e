// fcra-core/src/domain/mod.rs

pub mod dates;
pub mod error;
pub mod record;
pub mod reporting;
pub mod table;

// Convenience re-exports
pub use error::DomainError;
pub use record::{
    FieldUpdate, NewRecord, Portfolio, Record, RecordField, RemediationCategory,
    RemediationStatus,
};
