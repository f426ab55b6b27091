//! Custom error types for the expense ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// An expense field supplied by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Description,
    Amount,
    Category,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Description => write!(f, "Description"),
            Self::Amount => write!(f, "Amount"),
            Self::Category => write!(f, "Category"),
        }
    }
}

/// Rejected user input. The ledger is left untouched when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was empty
    #[error("{0} must be filled out")]
    MissingField(Field),

    /// The amount could not be parsed as a number
    #[error("Amount must be a number, got '{0}'")]
    NonNumericAmount(String),

    /// The amount parsed but is below zero
    #[error("Amount cannot be negative: {0}")]
    NegativeAmount(f64),

    /// The amount is above [`crate::models::amount::MAX_AMOUNT`]
    #[error("Amount cannot exceed {max}: {0}", max = crate::models::amount::MAX_AMOUNT)]
    AmountTooLarge(f64),
}

impl ValidationError {
    /// The field the error refers to
    pub fn field(&self) -> Field {
        match self {
            Self::MissingField(field) => *field,
            Self::NonNumericAmount(_) | Self::NegativeAmount(_) | Self::AmountTooLarge(_) => {
                Field::Amount
            }
        }
    }
}

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Bad user input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage file exists but could not be understood
    #[error("Corrupt data in {path}: {message}")]
    CorruptData { path: String, message: String },

    /// Writing the storage file failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors outside of the storage file
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a corrupt data error for the given storage path
    pub fn corrupt(path: &Path, message: impl Into<String>) -> Self {
        Self::CorruptData {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }

    /// Check if this is a storage (write) error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// The validation error, if that is what this is
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
