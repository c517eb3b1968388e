// fcra-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod error;
pub mod export;
pub mod fs;
pub mod ingest;
