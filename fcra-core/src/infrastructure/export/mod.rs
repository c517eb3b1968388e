// fcra-core/src/infrastructure/export/mod.rs

pub mod xlsx;

pub use xlsx::XlsxWriter;
