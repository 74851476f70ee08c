// Job Listing Repository Port (Interface)

use crate::domain::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};
use crate::error::Result;
use async_trait::async_trait;

/// Repository interface for job listing persistence
///
/// Each call is a single round trip to the store. Implementations hold no
/// mutable state besides their store handle and may be shared across tasks.
#[async_trait]
pub trait JobListingRepository: Send + Sync {
    /// Find one listing by id. Unknown or malformed ids yield `AppError::NotFound`.
    async fn get_job(&self, id: &str) -> Result<JobListing>;

    /// All listings in store order
    async fn get_jobs(&self) -> Result<Vec<JobListing>>;

    /// Insert a listing; the store assigns the id
    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing>;

    /// Apply the present fields and return the post-update listing
    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing>;

    /// Remove a listing. The response echoes `id` whether or not a record existed.
    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse>;

    /// Health check against the store
    async fn ping(&self) -> Result<()>;
}
