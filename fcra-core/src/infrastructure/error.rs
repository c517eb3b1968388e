// fcra-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(fcra::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDb(#[from] duckdb::Error),

    #[error("DuckDB connection lock poisoned")]
    #[diagnostic(
        code(fcra::infra::database::poisoned),
        help("A previous operation panicked while holding the connection. Restart the process.")
    )]
    Poisoned,
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(fcra::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV INGESTION ---
    #[error("CSV Error: {0}")]
    #[diagnostic(
        code(fcra::infra::csv),
        help("The file must be UTF-8 CSV with a header row.")
    )]
    Csv(#[from] csv::Error),

    // --- SPREADSHEET EXPORT ---
    #[error("Spreadsheet Error: {0}")]
    #[diagnostic(code(fcra::infra::xlsx))]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(fcra::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(fcra::infra::config_missing))]
    ConfigNotFound(String),
}

// Shortcut so that `?` works directly on duckdb calls
impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDb(err))
    }
}
