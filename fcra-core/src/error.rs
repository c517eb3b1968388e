// fcra-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FcraError {
    // --- DOMAIN ERRORS (field allowlist, metrics, values) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, database, parsing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl FcraError {
    /// Validation failures caused by the caller's input, as opposed to
    /// failures of the store or the filesystem.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FcraError::Domain(_))
    }
}

impl From<std::io::Error> for FcraError {
    fn from(err: std::io::Error) -> Self {
        FcraError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<duckdb::Error> for FcraError {
    fn from(err: duckdb::Error) -> Self {
        FcraError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDb(err)))
    }
}
