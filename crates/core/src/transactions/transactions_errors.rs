use thiserror::Error;

/// Custom error type for transaction-related operations
#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("Not found: {0}")]
    NotFound(String),
    /// The property exists but is not eligible for investor bookkeeping
    /// (not investor-funded, or no investor shares).
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<TransactionError> for String {
    fn from(error: TransactionError) -> Self {
        error.to_string()
    }
}
