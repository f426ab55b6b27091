//! Display formatting for terminal output
//!
//! Provides utilities for formatting expenses and summaries for terminal
//! display.

pub mod expense;
pub mod report;

pub use expense::{format_expense_added, format_expense_table};
pub use report::{format_bar, format_percentage, format_spending_chart, truncate};
