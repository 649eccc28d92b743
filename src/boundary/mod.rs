//! Collaborator contracts between the ledger engine and the outside world.
//!
//! The engine only sees positional rows coming in and a finished sheet going
//! out. Spreadsheet parsing and rendering live behind these two traits.

mod review;
#[cfg(test)]
mod tests;
mod workbook;
mod xlsx;

use crate::models::LedgerError;
use crate::report::Sheet;
use crate::types::RawRow;

pub use review::write_review;
pub use workbook::{is_supported_file, WorkbookSource};
pub use xlsx::{Document, XlsxSink};

/// Supplies the data rows of one statement, header rows already excluded.
pub trait RowSource {
    fn rows(&mut self) -> Result<Vec<RawRow>, LedgerError>;
}

/// Accepts a finished sheet under a file name.
pub trait ReportSink {
    type Receipt;

    fn deliver(&mut self, file_name: &str, sheet: &Sheet) -> Result<Self::Receipt, LedgerError>;
}

impl RowSource for Vec<RawRow> {
    fn rows(&mut self) -> Result<Vec<RawRow>, LedgerError> {
        Ok(std::mem::take(self))
    }
}
