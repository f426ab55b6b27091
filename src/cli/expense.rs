//! Expense CLI commands
//!
//! Recording and listing expenses from the command line.

use crate::display::{format_expense_added, format_expense_table};
use crate::error::{LedgerError, LedgerResult};
use crate::models::DefaultCategory;
use crate::tracker::ExpenseTracker;

/// Handle `add`
pub fn handle_add(
    tracker: &mut dyn ExpenseTracker,
    description: &str,
    amount: &str,
    category: &str,
) -> LedgerResult<()> {
    match tracker.add_expense(description, amount, category) {
        Ok(expense) => {
            println!("{}", format_expense_added(&expense));
            if DefaultCategory::find(expense.category()).is_none() {
                println!(
                    "Note: '{}' is not one of the suggested categories.",
                    expense.category()
                );
            }
            Ok(())
        }
        Err(err @ LedgerError::Storage(_)) => {
            eprintln!("Warning: the expense was recorded but could not be saved.");
            Err(err)
        }
        Err(err) => Err(err),
    }
}

/// Handle `list`
pub fn handle_list(tracker: &dyn ExpenseTracker) -> LedgerResult<()> {
    let expenses = tracker.all_expenses();
    println!("{}", format_expense_table(&expenses));
    Ok(())
}

/// Handle `categories`
pub fn handle_categories() -> LedgerResult<()> {
    println!("Suggested categories:");
    for category in DefaultCategory::all() {
        println!("  {}", category);
    }
    println!();
    println!("Any other category name is accepted as well.");
    Ok(())
}
