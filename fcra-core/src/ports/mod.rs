// fcra-core/src/ports/mod.rs

pub mod record_store;

pub use record_store::{PortfolioFilter, RecordStore};
