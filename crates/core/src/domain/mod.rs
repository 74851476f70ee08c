// Domain Layer - Job listing entities and inputs

pub mod job_listing;

// Re-exports
pub use job_listing::{
    normalize_listing_id, CreateJobListingInput, DeleteJobResponse, JobListing, JobListingId,
    UpdateJobListingInput, LISTING_ID_LEN, NIL_LISTING_ID,
};
