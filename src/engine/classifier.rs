use crate::config::LedgerConfig;
use crate::models::{Bucket, Classification, Transaction};

/// A single classification rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Interest paid by the bank on the account balance.
    BankInterest,
    /// Any other incoming payment that is not from the bank, a tax transfer or a refund.
    ClientRevenue,
    /// Subscription and commission fees charged by the bank.
    BankServiceFee,
    /// Payments to pre-approved counterparties.
    ApprovedCounterparty
}

impl Rule {
    /// Evaluation order. The first matching rule classifies the transaction.
    pub const CHAIN: [Rule; 4] = [
        Rule::BankInterest,
        Rule::ClientRevenue,
        Rule::BankServiceFee,
        Rule::ApprovedCounterparty
    ];

    pub fn bucket(self) -> Bucket {
        match self {
            Rule::BankInterest => Bucket::OtherIncome,
            Rule::ClientRevenue => Bucket::BusinessIncome,
            Rule::BankServiceFee | Rule::ApprovedCounterparty => Bucket::Expense
        }
    }

    /// The outcome of this rule for a transaction it matched.
    pub fn classify(self, transaction: &Transaction) -> Classification {
        let amount = match self.bucket() {
            Bucket::BusinessIncome | Bucket::OtherIncome => transaction.credit_amount,
            Bucket::Expense => transaction.debit_amount
        };

        Classification::new(self.bucket(), amount)
    }
}

/// Case-insensitive substring markers.
struct Markers(Vec<String>);

impl Markers {
    fn new(markers: &[&str]) -> Self {
        Self(markers.iter().map(|marker| marker.to_lowercase()).collect())
    }

    fn found_in(&self, text: &str) -> bool {
        self.0.iter().any(|marker| text.contains(marker.as_str()))
    }
}

/// Assigns transactions to ledger buckets using the fixed rule chain.
///
/// Classification is a pure function of the transaction; it never fails.
/// Transactions no rule accepts are `Ignored`.
pub struct Classifier {
    bank_name: Markers,
    interest: Markers,
    tax: Markers,
    refund: Markers,
    bank_fee: Markers,
    approved_tax_ids: &'static [&'static str]
}

impl Classifier {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            bank_name: Markers::new(&[config.bank_name]),
            interest: Markers::new(config.interest_markers),
            tax: Markers::new(config.tax_markers),
            refund: Markers::new(config.refund_markers),
            bank_fee: Markers::new(config.bank_fee_markers),
            approved_tax_ids: config.approved_tax_ids
        }
    }

    pub fn classify(&self, transaction: &Transaction) -> Classification {
        self.matching_rule(transaction)
            .map_or(Classification::Ignored, |rule| rule.classify(transaction))
    }

    /// The first rule of the chain that accepts the transaction.
    pub fn matching_rule(&self, transaction: &Transaction) -> Option<Rule> {
        let description = transaction.description.to_lowercase();

        Rule::CHAIN.into_iter().find(|rule| self.matches(*rule, transaction, &description))
    }

    fn matches(&self, rule: Rule, transaction: &Transaction, description: &str) -> bool {
        match rule {
            Rule::BankInterest => transaction.has_credit() && self.interest.found_in(description),
            Rule::ClientRevenue => {
                transaction.has_credit()
                    && !self.bank_name.found_in(description)
                    && !self.tax.found_in(description)
                    && !self.refund.found_in(description)
            }
            Rule::BankServiceFee => {
                transaction.has_debit() && self.bank_name.found_in(description) && self.bank_fee.found_in(description)
            }
            Rule::ApprovedCounterparty => {
                let tax_id = transaction.counterparty_tax_id.trim();
                transaction.has_debit() && self.approved_tax_ids.iter().any(|approved| *approved == tax_id)
            }
        }
    }
}
