use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CellError {
    #[error("Cell error: '{0}' is not a valid amount")]
    InvalidAmount(String),
    #[error("Cell error: {0} cannot be represented as a decimal amount")]
    NotRepresentable(f64)
}
