use rust_decimal::Decimal;

use crate::config::ColumnMap;
use crate::models::{LedgerError, Transaction};
use crate::types::{parse_amount, RawRow};

/// Maps positional statement rows onto transactions.
///
/// Missing cells become zero amounts and empty strings, so a short or blank
/// row yields a zero-amount transaction that the classifier will ignore. Only
/// text that cannot be read as an amount is rejected.
pub struct Normalizer {
    columns: ColumnMap
}

impl Normalizer {
    pub fn new(columns: ColumnMap) -> Self {
        Self { columns }
    }

    pub fn normalize(&self, row: &RawRow) -> Result<Transaction, LedgerError> {
        Ok(Transaction {
            line: row.line,
            date: row.text(self.columns.date),
            doc_number: row.text(self.columns.doc_number),
            counterparty_tax_id: row.text(self.columns.tax_id),
            description: row.text(self.columns.description),
            credit_amount: Self::amount(row, self.columns.credit)?,
            debit_amount: Self::amount(row, self.columns.debit)?
        })
    }

    fn amount(row: &RawRow, column: usize) -> Result<Decimal, LedgerError> {
        parse_amount(row.cell(column)).map_err(|error| LedgerError::invalid_amount(row, column, error))
    }
}
