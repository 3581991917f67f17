//! Custom error types for Momuney
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for Momuney operations
#[derive(Error, Debug)]
pub enum MomuneyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A short ID that matches more than one entity
    #[error("{identifier} matches {count} transactions; use a longer ID")]
    AmbiguousId { identifier: String, count: usize },

    /// Storage errors (I/O failures while reading or writing the store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The store file exists but could not be parsed
    #[error("User data file {} is corrupt: {message}", .path.display())]
    StoreCorrupt { path: PathBuf, message: String },

    /// A date filter whose start lies after its end
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl MomuneyError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if a short ID matched several entities
    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Self::AmbiguousId { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidDateRange { .. })
    }

    /// Check if the store file could not be parsed
    pub fn is_corrupt_store(&self) -> bool {
        matches!(self, Self::StoreCorrupt { .. })
    }
}

/// Result type alias for Momuney operations
pub type MomuneyResult<T> = Result<T, MomuneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MomuneyError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = MomuneyError::transaction_not_found("txn-1234");
        assert_eq!(err.to_string(), "Transaction not found: txn-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ambiguous_id_error() {
        let err = MomuneyError::AmbiguousId {
            identifier: "txn-1234abcd".into(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "txn-1234abcd matches 2 transactions; use a longer ID"
        );
        assert!(err.is_ambiguous());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_invalid_date_range_error() {
        let err = MomuneyError::InvalidDateRange {
            from: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: 2025-03-01 is after 2025-01-01"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_store_corrupt_error() {
        let err = MomuneyError::StoreCorrupt {
            path: PathBuf::from("/tmp/UserData.json"),
            message: "expected value".into(),
        };
        assert!(err.is_corrupt_store());
        assert!(err.to_string().contains("/tmp/UserData.json"));
    }
}
