mod bot_responder;

use crate::boundary::Document;

pub use bot_responder::Responder;

/// A message arriving from the user.
#[derive(Debug, Clone)]
pub enum Incoming {
    /// A bot command such as `/start`.
    Command(String),
    /// An uploaded file.
    Document {
        file_name: String,
        bytes: Vec<u8>
    }
}

/// The reply sent back to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Outgoing {
    Text(String),
    Report {
        document: Document,
        caption: String,
        /// Dropped high-value debits, present only when review output is enabled and something was dropped.
        review: Option<Document>
    }
}
