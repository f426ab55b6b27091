//! Front-end interface to the ledger
//!
//! Front ends (the CLI commands and the TUI) only talk to the ledger through
//! [`ExpenseTracker`], so any of them can be swapped without touching the
//! ledger itself.

use crate::error::LedgerResult;
use crate::ledger::Ledger;
use crate::models::Expense;
use crate::reports::Summary;

/// Operations a front end may perform on the expense ledger
pub trait ExpenseTracker {
    /// Validate and record a new expense from raw user input
    fn add_expense(&mut self, description: &str, amount: &str, category: &str)
        -> LedgerResult<Expense>;

    /// Snapshot of all expenses in insertion order
    fn all_expenses(&self) -> Vec<Expense>;

    /// Per-category totals
    fn summary(&self) -> Summary;
}

impl ExpenseTracker for Ledger {
    fn add_expense(
        &mut self,
        description: &str,
        amount: &str,
        category: &str,
    ) -> LedgerResult<Expense> {
        self.append(description, amount, category)
    }

    fn all_expenses(&self) -> Vec<Expense> {
        self.expenses().to_vec()
    }

    fn summary(&self) -> Summary {
        self.summarize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn record_all(tracker: &mut dyn ExpenseTracker) {
        tracker.add_expense("Groceries", "10.00", "Food").unwrap();
        tracker.add_expense("Snacks", "5.50", "Food").unwrap();
        tracker.add_expense("Rent", "20.00", "Rent").unwrap();
    }

    #[test]
    fn test_ledger_through_trait_object() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("expenses.json"));

        record_all(&mut ledger);

        let tracker: &dyn ExpenseTracker = &ledger;
        assert_eq!(tracker.all_expenses().len(), 3);
        assert_eq!(tracker.summary().get("Food"), Some(Amount::new(15.5)));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("expenses.json"));
        ledger.add_expense("Lunch", "8", "Food").unwrap();

        let snapshot = ledger.all_expenses();
        ledger.add_expense("Dinner", "20", "Food").unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(ledger.all_expenses().len(), 2);
    }

    #[test]
    fn test_rejected_input_not_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::new(temp_dir.path().join("expenses.json"));

        assert!(ledger.add_expense("Lunch", "twelve", "Food").is_err());
        assert!(ledger.all_expenses().is_empty());
        assert!(ledger.summary().is_empty());
    }
}
