//! CSV export functionality
//!
//! Exports the ledger to CSV: description, amount as decimal currency text,
//! and the display date, in ledger order.

use std::io::Write;

use crate::error::{CentavoError, CentavoResult};
use crate::models::Ledger;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(ledger: &Ledger, writer: W) -> CentavoResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["description", "amount", "date"])
        .map_err(|e| CentavoError::Export(e.to_string()))?;

    for txn in ledger.transactions() {
        csv_writer
            .write_record([
                txn.description.as_str(),
                &txn.amount.to_string(),
                txn.date.as_str(),
            ])
            .map_err(|e| CentavoError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CentavoError::Export(e.to_string()))?;

    Ok(())
}
