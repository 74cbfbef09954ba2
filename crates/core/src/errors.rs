//! Core error types for the Propfolio application.
//!
//! This module defines storage-agnostic error types. Storage-specific errors
//! (file I/O, JSON decoding, etc.) are converted to these types by the
//! storage layer.

use thiserror::Error;

use crate::distributions::DistributionError;
use crate::investments::InvestmentError;
use crate::investors::InvestorError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger application.
///
/// This enum represents all possible errors that can occur in the
/// application. Storage-specific errors are wrapped in string form to keep
/// this type storage-agnostic.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Investment error: {0}")]
    Investment(#[from] InvestmentError),

    #[error("Investor error: {0}")]
    Investor(#[from] InvestorError),

    #[error("Distribution error: {0}")]
    Distribution(#[from] DistributionError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Storage-agnostic error type for persistence operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert backend-specific errors (file system, JSON, etc.) into this
/// format.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The backing store could not be opened or created.
    #[error("Failed to open store: {0}")]
    OpenFailed(String),

    /// A read against the store failed.
    #[error("Store read failed: {0}")]
    ReadFailed(String),

    /// A write against the store failed.
    #[error("Store write failed: {0}")]
    WriteFailed(String),

    /// A stored document could not be decoded into its collection type.
    #[error("Failed to decode stored document: {0}")]
    Corrupt(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Internal/unexpected storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Corrupt(err.to_string()))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
