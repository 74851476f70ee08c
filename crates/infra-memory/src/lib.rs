// Job Board Infrastructure - In-Process Adapter
// Implements: JobListingRepository (no external store)

mod job_listing_repository;

pub use job_listing_repository::InMemoryJobListingRepository;
