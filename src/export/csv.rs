//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-compatible CSV file.

use std::io::Write;

use crate::error::{MomuneyError, MomuneyResult};
use crate::models::Transaction;

/// Export transactions to CSV, one row per transaction
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> MomuneyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let export_err = |e: csv::Error| MomuneyError::Export(e.to_string());

    csv_writer
        .write_record([
            "ID", "Date", "Category", "Vendor", "Location", "Amount", "Memo",
        ])
        .map_err(export_err)?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.date.to_string(),
                txn.category.clone(),
                txn.vendor.name.clone(),
                txn.vendor.location.clone(),
                format!("{:.2}", txn.amount.as_f64()),
                txn.memo.clone(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| MomuneyError::Export(e.to_string()))?;

    Ok(())
}
