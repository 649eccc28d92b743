use crate::types::LineNumber;
use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

const DATE_FORMAT: &str = "%d.%m.%Y";

// Largest magnitude at which every integral f64 is still exact.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

static EMPTY_CELL: Cell = Cell::Empty;

/// A single spreadsheet value as delivered by the row source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate)
}

impl Cell {
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.trim().is_empty(),
            Cell::Number(value) => value.is_nan(),
            Cell::Date(_) => false
        }
    }
}

impl Display for Cell {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(formatter, "{}", text.trim()),
            Cell::Number(value) if value.is_nan() => Ok(()),
            //NOTE: Identifiers such as tax ids often arrive as floats, "291530425.0" must read as "291530425"
            Cell::Number(value) if value.fract() == 0.0 && value.abs() < EXACT_INTEGER_LIMIT => {
                write!(formatter, "{}", *value as i64)
            }
            Cell::Number(value) => write!(formatter, "{value}"),
            Cell::Date(date) => write!(formatter, "{}", date.format(DATE_FORMAT))
        }
    }
}

/// One row of the source sheet, cells keyed by column position.
///
/// A row carries no meaning until the normalizer maps it onto a transaction.
/// Positions beyond the end of the row read as empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Line of the row in the source sheet, used for diagnostics only.
    pub line: LineNumber,
    cells: Vec<Cell>
}

impl RawRow {
    pub fn new(line: LineNumber, cells: Vec<Cell>) -> Self {
        Self { line, cells }
    }

    pub fn cell(&self, position: usize) -> &Cell {
        self.cells.get(position).unwrap_or(&EMPTY_CELL)
    }

    pub fn text(&self, position: usize) -> String {
        self.cell(position).to_string()
    }
}
