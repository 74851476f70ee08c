// Job Board Infrastructure - MongoDB Adapter
// Implements: JobListingRepository

mod connection;
mod document;
mod error_map;
mod job_listing_repository;
mod scope;

pub use connection::{connect, ping};
pub use job_listing_repository::MongoJobListingRepository;

// Re-export so callers can build clients without depending on the driver directly
pub use mongodb::{bson, Client};
