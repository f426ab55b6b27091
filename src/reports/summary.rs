//! Category Summary
//!
//! Per-category totals across every recorded expense. Categories keep the
//! order in which they first appear in the ledger.

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name
    pub category: String,
    /// Sum of all expense amounts in this category
    pub total: Amount,
    /// Number of expenses
    pub count: usize,
    /// Share of the grand total, 0-100
    pub percentage: f64,
}

/// Category summary of a ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    categories: Vec<CategoryTotal>,
    total: Amount,
    expense_count: usize,
}

impl Summary {
    /// Build a summary from expenses in ledger order
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut categories: Vec<CategoryTotal> = Vec::new();
        let mut total = Amount::zero();

        for expense in expenses {
            total += expense.amount();
            match categories
                .iter_mut()
                .find(|c| c.category == expense.category())
            {
                Some(entry) => {
                    entry.total += expense.amount();
                    entry.count += 1;
                }
                None => categories.push(CategoryTotal {
                    category: expense.category().to_string(),
                    total: expense.amount(),
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }

        // Totals read back from a hand-edited file can overflow to infinity
        if total.value().is_finite() && !total.is_zero() {
            for entry in &mut categories {
                entry.percentage = entry.total.value() / total.value() * 100.0;
            }
        }

        Self {
            categories,
            total,
            expense_count: expenses.len(),
        }
    }

    /// Total for a category, if any expense was filed under it
    pub fn get(&self, category: &str) -> Option<Amount> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.total)
    }

    /// Iterate categories in first-occurrence order
    pub fn iter(&self) -> std::slice::Iter<'_, CategoryTotal> {
        self.categories.iter()
    }

    /// Number of distinct categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Sum of every expense
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Number of expenses summarized
    pub fn expense_count(&self) -> usize {
        self.expense_count
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        if self.is_empty() {
            return "No expenses recorded.".to_string();
        }

        let mut output = String::new();

        output.push_str("Expense Summary\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<30} {:>12} {:>6} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        for entry in &self.categories {
            output.push_str(&format!(
                "{:<30} {:>12} {:>6} {:>7.1}%\n",
                entry.category,
                entry.total.to_string(),
                entry.count,
                entry.percentage
            ));
        }

        output.push_str(&"-".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<30} {:>12} {:>6}\n",
            "TOTAL",
            self.total.to_string(),
            self.expense_count
        ));

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut out = csv::Writer::from_writer(writer);

        out.write_record(["Category", "Amount", "Count", "Percentage"])
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        for entry in &self.categories {
            out.write_record([
                entry.category.clone(),
                format!("{:.2}", entry.total.value()),
                entry.count.to_string(),
                format!("{:.2}", entry.percentage),
            ])
            .map_err(|e| LedgerError::Export(e.to_string()))?;
        }

        out.write_record([
            "TOTAL".to_string(),
            format!("{:.2}", self.total.value()),
            self.expense_count.to_string(),
            if self.total.is_zero() {
                String::new()
            } else {
                "100.00".to_string()
            },
        ])
        .map_err(|e| LedgerError::Export(e.to_string()))?;

        out.flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
