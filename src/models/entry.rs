use rust_decimal::Decimal;

use crate::models::{Bucket, Transaction};

/// One reportable line of the ledger.
///
/// The amount lives in exactly one bucket; the renderer leaves the other two
/// amount columns blank.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub date: String,
    pub document_label: String,
    pub description: String,
    pub bucket: Bucket,
    pub amount: Decimal
}

impl LedgerEntry {
    pub fn new(transaction: &Transaction, bucket: Bucket, amount: Decimal, description_limit: usize) -> Self {
        Self {
            date: transaction.date.clone(),
            document_label: format!("Payment order No. {} dated {}", transaction.doc_number, transaction.date),
            description: transaction.description.chars().take(description_limit).collect(),
            bucket,
            amount
        }
    }

    /// The entry's amount if it belongs to `bucket`.
    pub fn amount_in(&self, bucket: Bucket) -> Option<Decimal> {
        (self.bucket == bucket).then_some(self.amount)
    }
}
