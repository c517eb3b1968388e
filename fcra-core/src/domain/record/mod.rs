// fcra-core/src/domain/record/mod.rs

pub mod field;
pub mod model;
pub mod portfolio;
pub mod taxonomy;

pub use field::{FieldKind, FieldUpdate, FieldValue, RecordField};
pub use model::{NewRecord, Record};
pub use portfolio::Portfolio;
pub use taxonomy::{RemediationCategory, RemediationStatus};
