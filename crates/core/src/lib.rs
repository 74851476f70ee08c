// Job Board Core - Domain Model, Config & Ports
// NO driver dependencies (adapters live in infra-* crates)

pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::StoreConfig;
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
