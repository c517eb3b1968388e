// fcra-core/src/infrastructure/export/xlsx.rs

use rust_xlsxwriter::{ColNum, Format, RowNum, Workbook, XlsxError};
use tracing::{debug, instrument};

use crate::application::ports::SpreadsheetWriter;
use crate::domain::table::{Cell, Table};
use crate::error::FcraError;
use crate::infrastructure::error::InfrastructureError;

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Office Open XML workbook with a single sheet and a bold header row.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxWriter;

impl XlsxWriter {
    pub fn new() -> Self {
        Self
    }

    fn render(table: &Table) -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&table.sheet_name)?;

        for (col, header) in table.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col_num(col)?, header, &header_format)?;
        }

        for (i, row) in table.rows.iter().enumerate() {
            // Row 0 holds the header.
            let row_num = RowNum::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
            for (col, cell) in row.iter().enumerate() {
                let col = col_num(col)?;
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col, text)?;
                    }
                    Cell::Integer(n) => {
                        worksheet.write_number(row_num, col, *n as f64)?;
                    }
                }
            }
        }
        worksheet.autofit();

        workbook.save_to_buffer()
    }
}

fn col_num(index: usize) -> Result<ColNum, XlsxError> {
    ColNum::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

impl SpreadsheetWriter for XlsxWriter {
    #[instrument(skip(self, table), fields(sheet = %table.sheet_name, rows = table.rows.len()))]
    fn write(&self, table: &Table) -> Result<Vec<u8>, FcraError> {
        let bytes = Self::render(table).map_err(InfrastructureError::Spreadsheet)?;
        debug!(bytes = bytes.len(), "Workbook rendered");
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        XLSX_CONTENT_TYPE
    }

    fn extension(&self) -> &'static str {
        "xlsx"
    }
}
