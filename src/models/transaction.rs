use rust_decimal::Decimal;

use crate::types::LineNumber;

/// A statement row mapped onto named fields.
///
/// Amounts are zero when the source cell was blank. A row that will be
/// classified is expected to carry exactly one non-zero amount; rows with both
/// amounts zero are always ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Line of the originating row in the statement.
    pub line: LineNumber,
    pub date: String,
    pub doc_number: String,
    /// Tax registration id of the counterparty, empty when the bank left it out.
    pub counterparty_tax_id: String,
    /// Payment purpose as written by the payer.
    pub description: String,
    /// Incoming funds.
    pub credit_amount: Decimal,
    /// Outgoing funds.
    pub debit_amount: Decimal
}

impl Transaction {
    pub fn has_credit(&self) -> bool {
        self.credit_amount > Decimal::ZERO
    }

    pub fn has_debit(&self) -> bool {
        self.debit_amount > Decimal::ZERO
    }
}
