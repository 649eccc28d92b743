use rust_decimal::Decimal;

use crate::models::{Bucket, Ledger, LedgerEntry, Totals};
use crate::report::{ReportRow, Sheet, Value, HEADERS, SHEET_TITLE};

const DATE: usize = 0;
const DOCUMENT: usize = 1;
const DESCRIPTION: usize = 2;
const INCOME: usize = 3;
const OTHER_INCOME: usize = 6;
const EXPENSE: usize = 7;

// Summary rows put their label under the description column.
const LABEL: usize = DESCRIPTION;

/// Lays the ledger out as the KUDiR sheet.
///
/// The sheet is the header row, one row per entry in ledger order, then the
/// period totals, the taxable base and the income tax.
pub fn build_sheet(ledger: &Ledger) -> Sheet {
    let mut rows = Vec::with_capacity(ledger.entries.len() + 4);

    rows.push(HEADERS.map(|title| Value::Text(title.to_string())));
    rows.extend(ledger.entries.iter().map(entry_row));
    rows.push(totals_row(&ledger.totals));
    rows.push(summary_row("Taxable base", ledger.tax.taxable_base));
    rows.push(summary_row(&format!("Income tax ({}%)", percent(ledger.tax.rate)), ledger.tax.tax));

    Sheet {
        title: SHEET_TITLE.to_string(),
        rows
    }
}

fn blank_row() -> ReportRow {
    std::array::from_fn(|_| Value::Blank)
}

fn entry_row(entry: &LedgerEntry) -> ReportRow {
    let amount = |bucket| entry.amount_in(bucket).map_or(Value::Blank, Value::Amount);

    let mut row = blank_row();
    row[DATE] = Value::Text(entry.date.clone());
    row[DOCUMENT] = Value::Text(entry.document_label.clone());
    row[DESCRIPTION] = Value::Text(entry.description.clone());
    row[INCOME] = amount(Bucket::BusinessIncome);
    row[OTHER_INCOME] = amount(Bucket::OtherIncome);
    row[EXPENSE] = amount(Bucket::Expense);
    row
}

fn totals_row(totals: &Totals) -> ReportRow {
    let mut row = summary_row("TOTAL for period", totals.total_income);
    row[OTHER_INCOME] = Value::Amount(totals.other_income);
    row[EXPENSE] = Value::Amount(totals.total_expense);
    row
}

fn summary_row(label: &str, amount: Decimal) -> ReportRow {
    let mut row = blank_row();
    row[LABEL] = Value::Text(label.to_string());
    row[INCOME] = Value::Amount(amount);
    row
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}
