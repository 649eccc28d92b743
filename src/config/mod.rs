//! Fixed business constants of the ledger.
//!
//! None of these values are user-configurable. They are gathered in one place
//! so that a change in the bank's export format or in the tax rules touches
//! this module only.


use rust_decimal::Decimal;

/// Positions of the statement columns the ledger reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub doc_number: usize,
    pub date: usize,
    pub debit: usize,
    pub credit: usize,
    pub tax_id: usize,
    pub description: usize
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            doc_number: 0,
            date: 1,
            debit: 8,
            credit: 9,
            tax_id: 11,
            description: 12
        }
    }
}

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub columns: ColumnMap,
    /// Leading rows of the statement (bank letterhead, account details) before the column titles.
    pub header_rows: usize,
    pub tax_rate: Decimal,
    /// Legal name of the bank as it appears in payment descriptions.
    pub bank_name: &'static str,
    /// Counterparties whose payments are pre-approved deductible expenses.
    pub approved_tax_ids: &'static [&'static str],
    pub interest_markers: &'static [&'static str],
    pub tax_markers: &'static [&'static str],
    pub refund_markers: &'static [&'static str],
    pub bank_fee_markers: &'static [&'static str],
    pub description_limit: usize,
    /// Ignored debits at or above this amount are reported for operator review.
    pub review_threshold: Decimal,
    pub currency: &'static str,
    pub report_file_name: &'static str,
    pub review_file_name: &'static str
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMap::default(),
            header_rows: 10,
            tax_rate: Decimal::new(20, 2),
            bank_name: "ОАО \"Белагропромбанк\"",
            approved_tax_ids: &["291530425", "291156481"],
            interest_markers: &["процент", "interest"],
            tax_markers: &["налог", "tax"],
            refund_markers: &["возврат", "refund"],
            bank_fee_markers: &[
                "абонентская плата",
                "комиссионное вознаграждение",
                "subscription fee",
                "commission fee"
            ],
            description_limit: 100,
            review_threshold: Decimal::new(100, 0),
            currency: "BYN",
            report_file_name: "KUDiR.xlsx",
            review_file_name: "KUDiR-review.csv"
        }
    }
}

impl LedgerConfig {
    /// Index of the first data row in the sheet: the header rows plus the column titles row.
    pub fn first_data_row(&self) -> usize {
        self.header_rows + 1
    }
}
