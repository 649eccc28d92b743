use std::io::Write;

use crate::models::{DroppedDebit, LedgerError};

/// Writes dropped debits as CSV, one record per debit after a header row.
///
/// Returns the underlying writer once everything has been flushed.
pub fn write_review<W: Write>(writer: W, dropped_debits: &[DroppedDebit]) -> Result<W, LedgerError> {
    let mut writer = csv::Writer::from_writer(writer);

    for debit in dropped_debits {
        writer.serialize(debit)?;
    }

    writer.flush()?;

    writer.into_inner().map_err(|error| LedgerError::Io(error.into_error()))
}
