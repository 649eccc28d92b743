use std::io::Cursor;
use std::path::Path;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::boundary::RowSource;
use crate::config::LedgerConfig;
use crate::models::LedgerError;
use crate::types::{Cell, RawRow};

const SUPPORTED_EXTENSIONS: [&str; 2] = ["xls", "xlsx"];

/// Whether the file name carries a spreadsheet extension the ledger can read.
pub fn is_supported_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| SUPPORTED_EXTENSIONS.iter().any(|supported| extension.eq_ignore_ascii_case(supported)))
}

/// Reads statement rows from the first worksheet of an `.xls`/`.xlsx` file held in memory.
///
/// Column positions are absolute sheet positions: a used range that does not
/// start in `A1` is padded back. The bank's leading header rows and the column
/// titles row after them are skipped.
pub struct WorkbookSource {
    bytes: Vec<u8>,
    first_data_row: usize
}

impl WorkbookSource {
    pub fn from_bytes(bytes: Vec<u8>, config: &LedgerConfig) -> Self {
        Self {
            bytes,
            first_data_row: config.first_data_row()
        }
    }
}

impl RowSource for WorkbookSource {
    fn rows(&mut self) -> Result<Vec<RawRow>, LedgerError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(std::mem::take(&mut self.bytes)))?;
        let range = workbook.worksheet_range_at(0).ok_or(LedgerError::EmptyWorkbook)??;

        let (start_row, start_column) = range.start().unwrap_or((0, 0));
        let (start_row, start_column) = (start_row as usize, start_column as usize);
        let first_data_row = self.first_data_row;

        let rows: Vec<RawRow> = range.rows()
            .enumerate()
            .map(|(offset, cells)| (start_row + offset, cells))
            .filter(|(position, _)| *position >= first_data_row)
            .map(|(position, cells)| {
                let mut values = vec![Cell::Empty; start_column];
                values.extend(cells.iter().map(Cell::from));
                RawRow::new(position + 1, values)
            })
            .collect();

        debug!("Read {} data rows from workbook", rows.len());

        Ok(rows)
    }
}

impl From<&Data> for Cell {
    fn from(value: &Data) -> Self {
        match value {
            Data::Int(value) => Cell::Number(*value as f64),
            Data::Float(value) => Cell::Number(*value),
            Data::String(text) => Cell::Text(text.clone()),
            Data::Bool(value) => Cell::Text(value.to_string()),
            Data::DateTime(value) => {
                let serial = value.as_f64();
                excel_serial_to_date(serial).map_or(Cell::Number(serial), Cell::Date)
            }
            Data::DateTimeIso(text) => Cell::Text(text.clone()),
            _ => Cell::Empty
        }
    }
}

pub(super) fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    NaiveDate::from_ymd_opt(1899, 12, 30)?.checked_add_days(Days::new(serial.trunc() as u64))
}
