use thiserror::Error;

/// Custom error type for distribution-related operations
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<DistributionError> for String {
    fn from(error: DistributionError) -> Self {
        error.to_string()
    }
}
