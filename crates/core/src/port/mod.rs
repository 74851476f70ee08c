// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod job_listing_repository;

// Re-exports
pub use id_provider::{HexIdProvider, IdProvider};
pub use job_listing_repository::JobListingRepository;
