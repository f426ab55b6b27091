//! Expense Ledger - record expenses, summarize them by category
//!
//! This library holds the core of the `expenses` application: a single-user
//! ledger of expenses persisted as a JSON file, per-category summaries, and
//! the command line and terminal front ends built on top of them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Amounts, expenses and the suggested categories
//! - `ledger`: The in-memory ledger and its persistence
//! - `tracker`: The interface front ends use to reach the ledger
//! - `reports`: Per-category summaries
//! - `storage`: JSON file reads and atomic writes
//! - `config`: Data file location
//! - `display`: Terminal formatting for the CLI
//! - `export`: CSV, JSON and YAML exports
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_ledger::Ledger;
//!
//! let mut ledger = Ledger::load("data/expenses.json")?;
//! ledger.append("Groceries", "42.50", "Food")?;
//! println!("{}", ledger.summarize().format_terminal());
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;
pub mod tracker;
pub mod tui;

pub use error::LedgerError;
pub use ledger::Ledger;
pub use tracker::ExpenseTracker;

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "expense_ledger=warn";

/// Initializes the global tracing subscriber, writing to stderr.
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
