use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{LedgerEntry, TaxEstimate, Totals, Transaction};
use crate::types::LineNumber;

/// Finished result of processing one statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    /// Classified entries in statement order.
    pub entries: Vec<LedgerEntry>,
    pub totals: Totals,
    pub tax: TaxEstimate,
    /// Ignored debits large enough to deserve a second look.
    pub dropped_debits: Vec<DroppedDebit>
}

/// A debit that matched no expense rule and was left out of the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DroppedDebit {
    pub line: LineNumber,
    pub date: String,
    pub doc_number: String,
    #[serde(rename = "tax_id")]
    pub counterparty_tax_id: String,
    pub description: String,
    pub amount: Decimal
}

impl From<&Transaction> for DroppedDebit {
    fn from(transaction: &Transaction) -> Self {
        Self {
            line: transaction.line,
            date: transaction.date.clone(),
            doc_number: transaction.doc_number.clone(),
            counterparty_tax_id: transaction.counterparty_tax_id.clone(),
            description: transaction.description.clone(),
            amount: transaction.debit_amount
        }
    }
}
