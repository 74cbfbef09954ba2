use thiserror::Error;

/// Custom error type for investor-related operations
#[derive(Debug, Error)]
pub enum InvestorError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<InvestorError> for String {
    fn from(error: InvestorError) -> Self {
        error.to_string()
    }
}
