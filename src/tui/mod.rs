//! Terminal User Interface module
//!
//! A single screen built with ratatui: an entry form for new expenses, the
//! expense table, per-category totals and a spending chart. The UI talks to
//! the ledger only through [`crate::tracker::ExpenseTracker`].

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
