use rust_decimal::Decimal;
use tracing::warn;

use crate::config::LedgerConfig;
use crate::models::{Classification, DroppedDebit, Ledger, LedgerEntry, LedgerError, TaxEstimate, Totals, Transaction};

/// Accumulates classified transactions into ledger entries and totals.
///
/// Entries keep the order in which transactions are accepted. Ignored
/// transactions never touch the totals, but ignored debits at or above the
/// review threshold are kept aside so an operator can check them.
pub struct Aggregator {
    tax_rate: Decimal,
    description_limit: usize,
    review_threshold: Decimal,
    totals: Totals,
    entries: Vec<LedgerEntry>,
    dropped_debits: Vec<DroppedDebit>
}

impl Aggregator {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            tax_rate: config.tax_rate,
            description_limit: config.description_limit,
            review_threshold: config.review_threshold,
            totals: Totals::default(),
            entries: Vec::new(),
            dropped_debits: Vec::new()
        }
    }

    pub fn accept(&mut self, transaction: &Transaction, classification: Classification) -> Result<(), LedgerError> {
        let Some((bucket, amount)) = classification.bucket().zip(classification.amount()) else {
            self.review(transaction);
            return Ok(())
        };

        self.totals.add(bucket, amount)
            .ok_or(LedgerError::AmountOverflow { line: transaction.line })?;
        self.entries.push(LedgerEntry::new(transaction, bucket, amount, self.description_limit));

        Ok(())
    }

    /// Finalizes the totals and computes the tax estimate.
    pub fn finish(self) -> Result<Ledger, LedgerError> {
        let tax = TaxEstimate::from_totals(&self.totals, self.tax_rate).ok_or(LedgerError::TaxOverflow)?;

        Ok(Ledger {
            tax,
            entries: self.entries,
            totals: self.totals,
            dropped_debits: self.dropped_debits
        })
    }

    fn review(&mut self, transaction: &Transaction) {
        if !transaction.has_debit() || transaction.debit_amount < self.review_threshold {
            return
        }

        warn!(
            "Debit [{}] of {} in line [{}] matched no expense rule and was left out of the ledger",
            transaction.doc_number, transaction.debit_amount, transaction.line
        );

        self.dropped_debits.push(DroppedDebit::from(transaction));
    }
}
