//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
