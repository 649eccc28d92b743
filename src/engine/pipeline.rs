use tracing::{debug, info};

use crate::boundary::{ReportSink, RowSource};
use crate::config::LedgerConfig;
use crate::engine::{Aggregator, Classifier, Normalizer};
use crate::models::{Ledger, LedgerError};
use crate::report::build_sheet;
use crate::types::RawRow;

/// Turns one bank statement into a KUDiR ledger.
///
/// A run is synchronous and self-contained: nothing survives between two
/// statements.
pub struct LedgerEngine {
    config: LedgerConfig,
    normalizer: Normalizer,
    classifier: Classifier
}

impl LedgerEngine {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config.columns),
            classifier: Classifier::new(&config),
            config
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Reads the statement from `source`, builds the ledger sheet and hands it to `sink`.
    ///
    /// Returns the ledger together with whatever the sink produced for the delivered sheet.
    pub fn run<S: RowSource, K: ReportSink>(&self, mut source: S, mut sink: K) -> Result<(Ledger, K::Receipt), LedgerError> {
        let rows = source.rows()?;
        let ledger = self.process(&rows)?;
        let receipt = sink.deliver(self.config.report_file_name, &build_sheet(&ledger))?;

        Ok((ledger, receipt))
    }

    /// Normalizes, classifies and aggregates already parsed statement rows.
    pub fn process(&self, rows: &[RawRow]) -> Result<Ledger, LedgerError> {
        let mut aggregator = Aggregator::new(&self.config);

        for row in rows {
            let transaction = self.normalizer.normalize(row)?;

            let classification = self.classifier.classify(&transaction);
            debug!(
                "Line [{}] matched rule {:?}, classified as {classification:?}",
                transaction.line,
                self.classifier.matching_rule(&transaction)
            );

            aggregator.accept(&transaction, classification)?;
        }

        let ledger = aggregator.finish()?;

        info!(
            "Processed {} rows into {} ledger entries, income {} expense {} tax {}",
            rows.len(),
            ledger.entries.len(),
            ledger.totals.total_income,
            ledger.totals.total_expense,
            ledger.tax.tax
        );

        Ok(ledger)
    }
}
