//! CSV Export functionality
//!
//! Exports expenses to CSV with a `description,amount,category` header.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use std::io::Write;

/// Export all expenses to CSV in insertion order
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    for expense in expenses {
        out.serialize(expense)
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    // An empty ledger still gets a header row
    if expenses.is_empty() {
        out.write_record(["description", "amount", "category"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
    }

    out.flush().map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}
