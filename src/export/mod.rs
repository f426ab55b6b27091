//! Export module for the expense ledger
//!
//! Provides ledger export in multiple formats:
//! - CSV: expenses only (spreadsheet-compatible)
//! - JSON: expenses plus category summary, machine-readable
//! - YAML: same content as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
