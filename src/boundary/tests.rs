use super::workbook::excel_serial_to_date;
use super::xlsx::render_xlsx;
use super::{is_supported_file, write_review, Document, ReportSink, RowSource, WorkbookSource, XlsxSink};

use std::io::Cursor;
use std::str::FromStr;

use anyhow::Result;
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_xlsxwriter::Workbook;

use crate::config::LedgerConfig;
use crate::models::{DroppedDebit, LedgerError};
use crate::report::{Sheet, Value, COLUMN_COUNT};
use crate::types::{Cell, RawRow};

struct StatementLine {
    doc_number: Option<&'static str>,
    debit: f64,
    credit: f64,
    tax_id: Option<f64>,
    description: &'static str
}

/// Builds a statement workbook: two blank rows, eight letterhead rows, the column titles row, then data.
fn create_statement(lines: &[StatementLine]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for row in 2..10 {
        worksheet.write_string(row, 1, format!("Letterhead line {row}"))?;
    }

    for column in 1..13 {
        worksheet.write_string(10, column, format!("Column {column}"))?;
    }

    for (index, line) in lines.iter().enumerate() {
        let row = 11 + index as u32;

        if let Some(doc_number) = line.doc_number {
            worksheet.write_string(row, 0, doc_number)?;
        }

        worksheet.write_string(row, 1, "03.10.2025")?;

        if line.debit > 0.0 {
            worksheet.write_number(row, 8, line.debit)?;
        }

        if line.credit > 0.0 {
            worksheet.write_number(row, 9, line.credit)?;
        }

        if let Some(tax_id) = line.tax_id {
            worksheet.write_number(row, 11, tax_id)?;
        }

        worksheet.write_string(row, 12, line.description)?;
    }

    Ok(workbook.save_to_buffer()?)
}

fn read_back(document: &Document) -> Result<calamine::Range<Data>> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(document.bytes.clone()))?;

    Ok(workbook.worksheet_range("KUDiR")?)
}

#[test]
fn test_supported_file_extensions() {
    assert!(is_supported_file("statement.xlsx"));
    assert!(is_supported_file("statement.xls"));
    assert!(is_supported_file("STATEMENT.XLSX"));
    assert!(!is_supported_file("statement.csv"));
    assert!(!is_supported_file("statement.xlsx.pdf"));
    assert!(!is_supported_file("xlsx"));
    assert!(!is_supported_file(""));
}

#[test]
fn test_workbook_source_skips_header_rows_and_keeps_positions() -> Result<()> {
    let bytes = create_statement(&[
        StatementLine { doc_number: Some("17"), debit: 0.0, credit: 1000.0, tax_id: None, description: "Payment for services" },
        StatementLine { doc_number: Some("18"), debit: 200.0, credit: 0.0, tax_id: Some(291530425.0), description: "Rent" }
    ])?;

    let mut source = WorkbookSource::from_bytes(bytes, &LedgerConfig::default());
    let rows = source.rows()?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].line, 12);
    assert_eq!(rows[0].text(0), "17");
    assert_eq!(rows[0].text(1), "03.10.2025");
    assert_eq!(rows[0].cell(9), &Cell::Number(1000.0));
    assert!(rows[0].cell(8).is_blank());
    assert_eq!(rows[0].text(12), "Payment for services");
    assert_eq!(rows[1].line, 13);
    assert_eq!(rows[1].cell(8), &Cell::Number(200.0));
    assert_eq!(rows[1].text(11), "291530425");

    Ok(())
}

#[test]
fn test_workbook_source_pads_range_not_starting_at_first_column() -> Result<()> {
    let bytes = create_statement(&[
        StatementLine { doc_number: None, debit: 30.0, credit: 0.0, tax_id: None, description: "Fee" }
    ])?;

    let rows = WorkbookSource::from_bytes(bytes, &LedgerConfig::default()).rows()?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].line, 12);
    assert!(rows[0].cell(0).is_blank());
    assert_eq!(rows[0].cell(8), &Cell::Number(30.0));
    assert_eq!(rows[0].text(12), "Fee");

    Ok(())
}

#[test]
fn test_workbook_source_rejects_unreadable_bytes() {
    let result = WorkbookSource::from_bytes(b"not a spreadsheet".to_vec(), &LedgerConfig::default()).rows();

    assert!(matches!(result, Err(LedgerError::Workbook(_))));
}

#[test]
fn test_in_memory_rows_are_a_row_source() -> Result<()> {
    let mut source = vec![RawRow::new(12, vec![Cell::Text("17".to_string())])];

    assert_eq!(source.rows()?.len(), 1);
    assert!(source.rows()?.is_empty());

    Ok(())
}

#[test]
fn test_data_cells_convert_to_statement_cells() {
    assert_eq!(Cell::from(&Data::Float(12.5)), Cell::Number(12.5));
    assert_eq!(Cell::from(&Data::Int(7)), Cell::Number(7.0));
    assert_eq!(Cell::from(&Data::String("Rent".to_string())), Cell::Text("Rent".to_string()));
    assert_eq!(Cell::from(&Data::Bool(true)), Cell::Text("true".to_string()));
    assert_eq!(Cell::from(&Data::Empty), Cell::Empty);
}

#[test]
fn test_excel_serial_dates() {
    assert_eq!(excel_serial_to_date(45933.0), NaiveDate::from_ymd_opt(2025, 10, 3));
    assert_eq!(excel_serial_to_date(45933.75), NaiveDate::from_ymd_opt(2025, 10, 3));
    assert_eq!(excel_serial_to_date(-1.0), None);
    assert_eq!(excel_serial_to_date(f64::NAN), None);
}

#[test]
fn test_xlsx_sink_renders_text_amounts_and_blanks() -> Result<()> {
    let mut header: [Value; COLUMN_COUNT] = std::array::from_fn(|_| Value::Blank);
    header[0] = Value::Text("Record date".to_string());

    let mut entry: [Value; COLUMN_COUNT] = std::array::from_fn(|_| Value::Blank);
    entry[2] = Value::Text("Payment for services".to_string());
    entry[3] = Value::Amount(Decimal::from_str("1000.50")?);

    let sheet = Sheet {
        title: "KUDiR".to_string(),
        rows: vec![header, entry]
    };

    let document = XlsxSink.deliver("KUDiR.xlsx", &sheet)?;
    let range = read_back(&document)?;

    assert_eq!(document.file_name, "KUDiR.xlsx");
    assert_eq!(range.height(), 2);
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Record date".to_string())));
    assert_eq!(range.get_value((1, 2)), Some(&Data::String("Payment for services".to_string())));
    assert_eq!(range.get_value((1, 3)), Some(&Data::Float(1000.5)));
    assert!(matches!(range.get_value((1, 4)), None | Some(Data::Empty)));

    Ok(())
}

#[test]
fn test_render_xlsx_keeps_all_rows() -> Result<()> {
    let rows = (0..5)
        .map(|index| {
            let mut row: [Value; COLUMN_COUNT] = std::array::from_fn(|_| Value::Blank);
            row[2] = Value::Text(format!("Row {index}"));
            row
        })
        .collect();

    let bytes = render_xlsx(&Sheet { title: "KUDiR".to_string(), rows })?;
    let range = read_back(&Document { file_name: "KUDiR.xlsx".to_string(), bytes })?;

    assert_eq!(range.height(), 5);
    assert_eq!(range.get_value((4, 2)), Some(&Data::String("Row 4".to_string())));

    Ok(())
}

#[test]
fn test_review_is_written_as_csv() -> Result<()> {
    let dropped = DroppedDebit {
        line: 14,
        date: "03.10.2025".to_string(),
        doc_number: "19".to_string(),
        counterparty_tax_id: "100000001".to_string(),
        description: "Laptop".to_string(),
        amount: Decimal::from_str("750")?
    };

    let bytes = write_review(Vec::new(), &[dropped])?;
    let output = String::from_utf8(bytes)?;
    let mut lines = output.lines();

    assert_eq!(lines.next(), Some("line,date,doc_number,tax_id,description,amount"));
    assert_eq!(lines.next(), Some("14,03.10.2025,19,100000001,Laptop,750"));
    assert_eq!(lines.next(), None);

    Ok(())
}
