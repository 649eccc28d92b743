mod builder;

use rust_decimal::Decimal;

pub use builder::build_sheet;

pub const COLUMN_COUNT: usize = 11;

pub const HEADERS: [&str; COLUMN_COUNT] = [
    "Record date",
    "Document name/number/date",
    "Operation description",
    "Income recognized in period (amount)",
    "Taxes/fees withheld from revenue",
    "Exempt income",
    "Other receipts",
    "Expenses attributable to period",
    "Expenses per allowance",
    "Other expenses",
    "Note"
];

pub const SHEET_TITLE: &str = "KUDiR";

/// Content of one output cell. Blank cells stay empty rather than zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Blank,
    Text(String),
    Amount(Decimal)
}

/// Every report row has exactly `COLUMN_COUNT` cells.
pub type ReportRow = [Value; COLUMN_COUNT];

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub title: String,
    pub rows: Vec<ReportRow>
}
