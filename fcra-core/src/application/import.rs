// fcra-core/src/application/import.rs

use std::path::Path;
use tracing::{info, instrument, warn};

use crate::error::FcraError;
use crate::infrastructure::ingest::{self, CsvBatch, RejectedRow};
use crate::ports::RecordStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped_blank: usize,
    pub rejected: Vec<RejectedRow>,
}

/// Replaces the store contents with the rows of a CSV file.
///
/// Bad rows are reported, not fatal. The previous contents are discarded
/// only once the file has been read.
#[instrument(skip(store), fields(engine = store.engine_name()))]
pub async fn import_records(store: &dyn RecordStore, path: &Path) -> Result<ImportReport, FcraError> {
    let batch = ingest::read_records_from_path(path)?;
    load_batch(store, batch).await
}

/// Same as [`import_records`] for an in-memory CSV document.
pub async fn import_csv_bytes(store: &dyn RecordStore, bytes: &[u8]) -> Result<ImportReport, FcraError> {
    let batch = ingest::read_records(bytes)?;
    load_batch(store, batch).await
}

async fn load_batch(store: &dyn RecordStore, batch: CsvBatch) -> Result<ImportReport, FcraError> {
    let CsvBatch {
        rows,
        skipped_blank,
        rejected,
    } = batch;

    let imported = store.replace_all(rows).await?;
    if !rejected.is_empty() {
        warn!(count = rejected.len(), "Some CSV rows were rejected");
    }
    info!(imported, skipped_blank, "Import complete");

    Ok(ImportReport {
        imported,
        skipped_blank,
        rejected,
    })
}
