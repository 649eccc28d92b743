mod entry;
mod errors;
mod ledger;
mod totals;
mod transaction;

use rust_decimal::Decimal;

pub use entry::LedgerEntry;
pub use errors::LedgerError;
pub use ledger::{DroppedDebit, Ledger};
pub use totals::{TaxEstimate, Totals};
pub use transaction::Transaction;

/// The three mutually exclusive amount columns of the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    BusinessIncome,
    OtherIncome,
    Expense
}

/// Outcome of classifying a single transaction.
///
/// Every variant except `Ignored` carries the amount that lands in its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    BusinessIncome(Decimal),
    OtherIncome(Decimal),
    Expense(Decimal),
    Ignored
}

impl Classification {
    pub fn new(bucket: Bucket, amount: Decimal) -> Self {
        match bucket {
            Bucket::BusinessIncome => Self::BusinessIncome(amount),
            Bucket::OtherIncome => Self::OtherIncome(amount),
            Bucket::Expense => Self::Expense(amount)
        }
    }

    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            Self::BusinessIncome(_) => Some(Bucket::BusinessIncome),
            Self::OtherIncome(_) => Some(Bucket::OtherIncome),
            Self::Expense(_) => Some(Bucket::Expense),
            Self::Ignored => None
        }
    }

    pub fn amount(&self) -> Option<Decimal> {
        match self {
            Self::BusinessIncome(amount) | Self::OtherIncome(amount) | Self::Expense(amount) => Some(*amount),
            Self::Ignored => None
        }
    }
}
