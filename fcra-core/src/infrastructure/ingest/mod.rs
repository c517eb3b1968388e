// fcra-core/src/infrastructure/ingest/mod.rs

pub mod csv;

pub use self::csv::{CsvBatch, RejectedRow, read_records, read_records_from_path};
