mod amount;
mod cell;
mod errors;

pub use amount::parse_amount;
pub use cell::{Cell, RawRow};
pub use errors::CellError;

/// 1-based line number of a row in the source sheet.
pub type LineNumber = usize;
