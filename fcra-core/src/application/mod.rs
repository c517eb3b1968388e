// fcra-core/src/application/mod.rs

pub mod export;
pub mod import;
pub mod ports;
pub mod records;
pub mod reporting;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE) ---
// The binary only needs `use fcra_core::application::{ReportingService, ...}`.

pub use export::{ExportDocument, ExportTarget, export, export_table};
pub use import::{ImportReport, import_csv_bytes, import_records};
pub use records::{update_record, update_record_at};
pub use reporting::ReportingService;
pub use seed::{demo_records, seed_demo_records};
