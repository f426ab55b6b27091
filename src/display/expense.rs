//! Expense display formatting
//!
//! Formats the ledger contents as a terminal table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Category")]
    category: String,
}

/// Format expenses as a table in insertion order
pub fn format_expense_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n\nRun 'expenses add <DESCRIPTION> <AMOUNT> <CATEGORY>' to add one."
            .to_string();
    }

    let rows = expenses.iter().enumerate().map(|(i, e)| ExpenseRow {
        index: i + 1,
        description: e.description().to_string(),
        amount: e.amount().to_string(),
        category: e.category().to_string(),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string()
}

/// Format a single expense confirmation line
pub fn format_expense_added(expense: &Expense) -> String {
    format!("Added expense: {}", expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;

    #[test]
    fn test_empty_table() {
        assert!(format_expense_table(&[]).starts_with("No expenses recorded."));
    }

    #[test]
    fn test_table_contents() {
        let expenses = vec![
            Expense::new("Groceries", Amount::new(42.1), "Food").unwrap(),
            Expense::new("Internet", Amount::new(55.0), "Utilities").unwrap(),
        ];
        let table = format_expense_table(&expenses);

        assert!(table.contains("Description"));
        assert!(table.contains("Groceries"));
        assert!(table.contains("$42.10"));
        assert!(table.contains("Utilities"));

        let groceries = table.find("Groceries").unwrap();
        let internet = table.find("Internet").unwrap();
        assert!(groceries < internet);
    }

    #[test]
    fn test_added_line() {
        let expense = Expense::new("Movie", Amount::new(12.0), "Entertainment").unwrap();
        assert_eq!(
            format_expense_added(&expense),
            "Added expense: Movie: $12.00 [Entertainment]"
        );
    }
}
