//! Reports module
//!
//! Aggregate views over the ledger.

pub mod summary;

pub use summary::{CategoryTotal, Summary};
