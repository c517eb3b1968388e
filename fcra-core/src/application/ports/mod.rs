// fcra-core/src/application/ports/mod.rs

pub mod spreadsheet;

pub use spreadsheet::SpreadsheetWriter;
