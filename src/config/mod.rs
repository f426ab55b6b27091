//! Configuration module for the expense ledger
//!
//! The only configurable value is the location of the storage file.

pub mod paths;

pub use paths::{LedgerPaths, DEFAULT_DATA_FILE};
