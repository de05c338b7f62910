//! Custom error types for the finance ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The persisted ledger exists but could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// Date text is not a valid YYYY-MM-DD calendar date
    #[error("Invalid date format! Use YYYY-MM-DD (got '{0}')")]
    InvalidDate(String),

    /// Amount text is not a number, or not positive
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A 1-based selection fell outside the offered options
    #[error("Invalid {what} selection '{input}': choose 1-{max}")]
    InvalidSelection {
        what: &'static str,
        input: String,
        max: usize,
    },

    /// Edit/delete target does not exist; `number` is the 1-based number shown
    #[error("Invalid index! {kind} number {number} does not exist ({len} records)")]
    IndexOutOfRange {
        kind: &'static str,
        number: usize,
        len: usize,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LedgerError {
    /// Create a selection error for a 1-based choice
    pub fn selection(what: &'static str, input: impl Into<String>, max: usize) -> Self {
        Self::InvalidSelection {
            what,
            input: input.into(),
            max,
        }
    }

    /// Check if this error came from rejecting user input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate(_) | Self::InvalidAmount(_) | Self::InvalidSelection { .. }
        )
    }

    /// Check if this is an out-of-bounds position error
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_selection_error() {
        let err = LedgerError::selection("category", "9", 6);
        assert_eq!(err.to_string(), "Invalid category selection '9': choose 1-6");
        assert!(err.is_validation());
        assert!(!err.is_index_error());
    }

    #[test]
    fn test_index_error() {
        let err = LedgerError::IndexOutOfRange {
            kind: "Income",
            number: 4,
            len: 2,
        };
        assert!(err.is_index_error());
        assert_eq!(
            err.to_string(),
            "Invalid index! Income number 4 does not exist (2 records)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
