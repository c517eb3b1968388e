// fcra-core/src/infrastructure/fs.rs

use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::infrastructure::error::InfrastructureError;

/// Writes `bytes` to `path` through a sibling temporary file, so readers
/// never observe a half-written workbook.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), InfrastructureError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(bytes)?;
    staged.persist(path).map_err(|e| InfrastructureError::Io(e.error))?;
    Ok(())
}

/// Stores an export document under `dir`, creating the directory when
/// needed. Returns the final path.
pub fn save_export(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, InfrastructureError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    atomic_write(&path, bytes)?;
    info!(path = ?path, bytes = bytes.len(), "Export written");
    Ok(path)
}
