use tracing::{error, info, warn};

use crate::boundary::{is_supported_file, write_review, Document, WorkbookSource, XlsxSink};
use crate::config::LedgerConfig;
use crate::engine::LedgerEngine;
use crate::models::{Ledger, LedgerError};
use crate::responder::{Incoming, Outgoing};

const GREETING: &str = "Hi! Send me a bank statement (.xls or .xlsx) and I will build the KUDiR ledger.";
const RESEND_PROMPT: &str = "Please send the statement as an .xls or .xlsx file.";

/// Answers user messages: greets on `/start` and turns uploaded statements into ledgers.
///
/// Each statement is handled start to finish within one call. Failures never
/// escape as errors; they become a text reply and no file is sent.
pub struct Responder {
    engine: LedgerEngine,
    review: bool
}

impl Responder {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            engine: LedgerEngine::new(config),
            review: false
        }
    }

    /// Attaches a CSV of dropped high-value debits to successful replies.
    pub fn with_review(mut self, enabled: bool) -> Self {
        self.review = enabled;
        self
    }

    /// Returns `None` for messages the bot does not answer.
    pub fn handle(&self, incoming: Incoming) -> Option<Outgoing> {
        match incoming {
            Incoming::Command(command) => self.command(&command),
            Incoming::Document { file_name, bytes } => Some(self.statement(&file_name, bytes))
        }
    }

    fn command(&self, command: &str) -> Option<Outgoing> {
        match command.trim().trim_start_matches('/') {
            "start" => Some(Outgoing::Text(GREETING.to_string())),
            _ => None
        }
    }

    fn statement(&self, file_name: &str, bytes: Vec<u8>) -> Outgoing {
        match self.build_report(file_name, bytes) {
            Ok(outgoing) => outgoing,
            Err(error @ LedgerError::UnsupportedFormat { .. }) => {
                warn!("{error}");
                Outgoing::Text(RESEND_PROMPT.to_string())
            }
            Err(error) => {
                error!("Statement [{file_name}] failed: {error}");
                Outgoing::Text(format!("Error: {error}"))
            }
        }
    }

    fn build_report(&self, file_name: &str, bytes: Vec<u8>) -> Result<Outgoing, LedgerError> {
        if !is_supported_file(file_name) {
            return Err(LedgerError::unsupported_format(file_name));
        }

        let config = self.engine.config();
        let source = WorkbookSource::from_bytes(bytes, config);
        let (ledger, document) = self.engine.run(source, XlsxSink)?;

        info!("Statement [{file_name}] produced {} ledger entries", ledger.entries.len());

        let review = if self.review && !ledger.dropped_debits.is_empty() {
            Some(Document {
                file_name: config.review_file_name.to_string(),
                bytes: write_review(Vec::new(), &ledger.dropped_debits)?
            })
        } else {
            None
        };

        Ok(Outgoing::Report {
            caption: caption(&ledger, config.currency),
            document,
            review
        })
    }
}

fn caption(ledger: &Ledger, currency: &str) -> String {
    format!(
        "Done!\n\nIncome: {:.2} {currency}\nTax: {:.2} {currency}",
        ledger.totals.total_income.round_dp(2),
        ledger.tax.tax
    )
}
