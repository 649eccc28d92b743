use rust_decimal::Decimal;

use crate::models::Bucket;

const TAX_DECIMAL_PLACES: u32 = 2;

/// Running sums of the ledger's amount columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub other_income: Decimal
}

impl Totals {
    /// Returns `None` and leaves the totals untouched when the sum overflows.
    pub fn add(&mut self, bucket: Bucket, amount: Decimal) -> Option<()> {
        let total = match bucket {
            Bucket::BusinessIncome => &mut self.total_income,
            Bucket::OtherIncome => &mut self.other_income,
            Bucket::Expense => &mut self.total_expense
        };

        *total = total.checked_add(amount)?;

        Some(())
    }
}

/// Taxable base and income tax derived from finalized totals.
///
/// Other income (bank interest) is not part of the taxable base. A negative
/// base yields a negative tax; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxEstimate {
    pub rate: Decimal,
    pub taxable_base: Decimal,
    pub tax: Decimal
}

impl TaxEstimate {
    /// `None` when the base or the tax falls outside the `Decimal` range.
    pub fn from_totals(totals: &Totals, rate: Decimal) -> Option<Self> {
        let taxable_base = totals.total_income.checked_sub(totals.total_expense)?;

        // round_dp rounds half to even
        Some(Self {
            rate,
            taxable_base,
            tax: taxable_base.checked_mul(rate)?.round_dp(TAX_DECIMAL_PLACES)
        })
    }
}
