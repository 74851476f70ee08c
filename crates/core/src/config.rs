// Store Configuration

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "graphql-job-board";
pub const DEFAULT_COLLECTION: &str = "jobs";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OPERATION_TIMEOUT_SECS: u64 = 30;

/// Where the store lives and what its collections are called.
///
/// Supplied at construction time; loading from files/env is the binary's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Bound for connecting and the initial ping
    pub connect_timeout_secs: u64,
    /// Bound for each data operation
    pub operation_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            operation_timeout_secs: DEFAULT_OPERATION_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.uri.trim().is_empty() {
            return Err(AppError::Config("uri cannot be empty".to_string()));
        }
        if self.database.trim().is_empty() {
            return Err(AppError::Config("database cannot be empty".to_string()));
        }
        if self.collection.trim().is_empty() {
            return Err(AppError::Config("collection cannot be empty".to_string()));
        }
        if self.connect_timeout_secs == 0 || self.operation_timeout_secs == 0 {
            return Err(AppError::Config(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
