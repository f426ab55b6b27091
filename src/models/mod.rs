//! Core data models for the expense ledger
//!
//! This module contains the value types recorded in the ledger: expenses,
//! their amounts, and the suggested category list.

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::Amount;
pub use category::DefaultCategory;
pub use expense::Expense;
