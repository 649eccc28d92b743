use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use crate::boundary::ReportSink;
use crate::models::LedgerError;
use crate::report::{Sheet, Value};

const AMOUNT_FORMAT: &str = "0.00";

/// A named file ready to be handed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub file_name: String,
    pub bytes: Vec<u8>
}

/// Renders delivered sheets into in-memory `.xlsx` documents.
#[derive(Debug, Default)]
pub struct XlsxSink;

impl ReportSink for XlsxSink {
    type Receipt = Document;

    fn deliver(&mut self, file_name: &str, sheet: &Sheet) -> Result<Document, LedgerError> {
        Ok(Document {
            file_name: file_name.to_string(),
            bytes: render_xlsx(sheet)?
        })
    }
}

/// Writes text as strings and amounts as numbers; blank values leave the cell empty.
pub fn render_xlsx(sheet: &Sheet) -> Result<Vec<u8>, LedgerError> {
    let amount_format = Format::new().set_num_format(AMOUNT_FORMAT);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.title)?;

    for (row_index, row) in sheet.rows.iter().enumerate() {
        let row_number = row_index as u32;

        for (column_index, value) in row.iter().enumerate() {
            let column_number = column_index as u16;

            match value {
                Value::Blank => {}
                Value::Text(text) => {
                    worksheet.write_string(row_number, column_number, text.as_str())?;
                }
                Value::Amount(amount) => {
                    let number = amount.to_f64().unwrap_or_default();
                    worksheet.write_number_with_format(row_number, column_number, number, &amount_format)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
