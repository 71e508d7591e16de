//! Custom error types for outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Ledger mutations report `ValidationError`,
//! the amount parser reports `ParseError`, and `OutlayError` is the crate-wide
//! wrapper used at the application boundary.

use thiserror::Error;

/// Errors reported by ledger mutation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Category was empty after trimming surrounding whitespace
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Amount was negative or not a finite number
    #[error("Amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    /// Removal index was outside the ledger's current bounds
    #[error("Index {index} is out of range for a ledger of {len} expenses")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors reported by the amount-string parser
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input did not reduce to a finite number
    #[error("Not a number: {0:?}")]
    NotANumber(String),
}

/// The main error type for outlay operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// Ledger validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Amount parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl OutlayError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for OutlayError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for OutlayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, ValidationError>;

/// Result type alias for outlay operations
pub type OutlayResult<T> = Result<T, OutlayError>;
