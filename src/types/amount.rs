use crate::types::errors::CellError;
use crate::types::Cell;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

// Float cells carry binary noise; statement amounts never need more than this.
const DECIMAL_PLACES: u32 = 4;

/// Reads a monetary amount out of a cell.
///
/// Blank cells are a zero amount, not an error. Text cells accept the formats
/// banking portals export: spaces or non-breaking spaces as thousands
/// separators, and either a comma or a dot as the decimal separator with the
/// other one grouping thousands.
pub fn parse_amount(cell: &Cell) -> Result<Decimal, CellError> {
    if cell.is_blank() {
        return Ok(Decimal::ZERO);
    }

    match cell {
        Cell::Number(value) => Decimal::from_f64(*value)
            .map(|amount| amount.round_dp(DECIMAL_PLACES))
            .ok_or(CellError::NotRepresentable(*value)),
        Cell::Text(text) => parse_text(text),
        Cell::Date(date) => Err(CellError::InvalidAmount(date.to_string())),
        Cell::Empty => Ok(Decimal::ZERO)
    }
}

/// The last separator is the decimal one, the other kind is a thousands separator.
fn parse_text(text: &str) -> Result<Decimal, CellError> {
    let invalid = || CellError::InvalidAmount(text.trim().to_string());
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let normalized = match compact.rfind(['.', ',']) {
        Some(position) => {
            let (whole, fraction) = compact.split_at(position);
            let (decimal, thousands) = if fraction.starts_with('.') { ('.', ',') } else { (',', '.') };

            //NOTE: "1,234,56" has no unambiguous reading
            if whole.contains(decimal) {
                return Err(invalid());
            }

            format!("{}.{}", whole.replace(thousands, ""), &fraction[1..])
        }
        None => compact
    };

    Decimal::from_str(&normalized).map_err(|_| invalid())
}
