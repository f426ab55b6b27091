//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the ledger through [`crate::tracker::ExpenseTracker`].

pub mod expense;
pub mod export;
pub mod report;

pub use expense::{handle_add, handle_categories, handle_list};
pub use export::{handle_export, ExportFormat};
pub use report::{handle_chart, handle_summary};
