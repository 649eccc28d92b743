use crate::types::{CellError, LineNumber, RawRow};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Unsupported file format for [{file_name}], expected .xls or .xlsx")]
    UnsupportedFormat {
        file_name: String
    },
    #[error("Unable to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Workbook does not contain any worksheet")]
    EmptyWorkbook,
    #[error("Invalid amount in line [{line}] column [{column}]: {source}")]
    InvalidAmount {
        line: LineNumber,
        column: usize,
        source: CellError
    },
    #[error("Amount in line [{line}] pushes a ledger total out of range")]
    AmountOverflow {
        line: LineNumber
    },
    #[error("Taxable base is out of range")]
    TaxOverflow,
    #[error("Unable to render report: {0}")]
    Render(#[from] rust_xlsxwriter::XlsxError),
    #[error("Unable to write review: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error)
}

impl LedgerError {
    pub fn unsupported_format(file_name: &str) -> Self {
        Self::UnsupportedFormat { file_name: file_name.to_string() }
    }

    pub fn invalid_amount(row: &RawRow, column: usize, source: CellError) -> Self {
        Self::InvalidAmount {
            line: row.line,
            column,
            source
        }
    }
}
