//! JSON Export functionality
//!
//! Exports the ledger together with its category summary, wrapped in a
//! versioned document.

use crate::error::{LedgerError, LedgerResult};
use crate::models::Expense;
use crate::reports::{CategoryTotal, Summary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of expenses
    pub expense_count: usize,

    /// Sum of every expense
    pub total: f64,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    /// Per-category totals
    pub summary: Vec<CategoryTotal>,
}

impl LedgerExport {
    /// Build an export from a snapshot of the ledger
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let summary = Summary::from_expenses(expenses);

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: expenses.len(),
            total: summary.total().value(),
            expenses: expenses.to_vec(),
            summary: summary.iter().cloned().collect(),
        }
    }
}

/// Export the ledger to JSON
pub fn export_json<W: Write>(expenses: &[Expense], writer: W, pretty: bool) -> LedgerResult<()> {
    let export = LedgerExport::from_expenses(expenses);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    fn sample() -> Vec<Expense> {
        vec![
            Expense::new("Groceries", Amount::new(10.0), "Food").unwrap(),
            Expense::new("Lunch", Amount::new(5.5), "Food").unwrap(),
            Expense::new("Rent", Amount::new(20.0), "Rent").unwrap(),
        ]
    }

    #[test]
    fn test_export_structure() {
        let export = LedgerExport::from_expenses(&sample());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.expense_count, 3);
        assert_eq!(export.total, 35.5);
        assert_eq!(export.summary.len(), 2);
        assert_eq!(export.summary[0].category, "Food");
    }

    #[test]
    fn test_export_json_parses_back() {
        let mut buf = Vec::new();
        export_json(&sample(), &mut buf, true).unwrap();

        let parsed: LedgerExport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.expenses, sample());
        assert_eq!(parsed.summary[1].total, Amount::new(20.0));
    }
}
