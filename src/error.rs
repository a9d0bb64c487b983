//! Custom error types for centavo
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for centavo operations
#[derive(Error, Debug)]
pub enum CentavoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Removal of a row that does not exist
    #[error("No entry at row {row} (ledger has {len} entries)")]
    EntryNotFound { row: usize, len: usize },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CentavoError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an entry-not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CentavoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CentavoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for centavo operations
pub type CentavoResult<T> = Result<T, CentavoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CentavoError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CentavoError::EntryNotFound { row: 5, len: 2 };
        assert_eq!(err.to_string(), "No entry at row 5 (ledger has 2 entries)");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_validation_error() {
        let err = CentavoError::validation("description is empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let centavo_err: CentavoError = io_err.into();
        assert!(matches!(centavo_err, CentavoError::Io(_)));
    }
}
