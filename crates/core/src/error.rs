// Central Error Type for the Store Layer

use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Operation '{operation}' timed out after {timeout_secs}s")]
    Timeout {
        operation: &'static str,
        timeout_secs: u64,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Not-found error for a job listing id
    pub fn listing_not_found(id: &str) -> Self {
        AppError::NotFound(format!("job listing {}", id))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

// Note: mongodb::error::Error conversion is handled in infra-mongo
// by a mapping helper (orphan rules keep the driver out of core)
