// fcra-core/src/application/ports/spreadsheet.rs

use crate::domain::table::Table;
use crate::error::FcraError;

pub trait SpreadsheetWriter: Send + Sync {
    /// Renders `table` as a complete document and returns its bytes.
    fn write(&self, table: &Table) -> Result<Vec<u8>, FcraError>;

    /// MIME type of the produced document.
    fn content_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}
