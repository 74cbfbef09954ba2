use thiserror::Error;

/// Custom error type for investment ledger operations
#[derive(Debug, Error)]
pub enum InvestmentError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<InvestmentError> for String {
    fn from(error: InvestmentError) -> Self {
        error.to_string()
    }
}
