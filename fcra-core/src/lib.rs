// fcra-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Record store and spreadsheet writer contracts.
pub mod ports;

// 2. Domain (business core)
// Record taxonomy, date rules, aggregation engine, tabular model.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// DuckDB, CSV ingestion, XLSX export, YAML configuration.
pub mod infrastructure;

// 4. Application (Use Cases)
// Reporting queries, field updates, import and export orchestration.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::FcraError;
