// In-Memory JobListingRepository Implementation

use async_trait::async_trait;
use jobboard_core::domain::{
    normalize_listing_id, CreateJobListingInput, DeleteJobResponse, JobListing,
    UpdateJobListingInput, NIL_LISTING_ID,
};
use jobboard_core::port::{HexIdProvider, IdProvider, JobListingRepository};
use jobboard_core::{AppError, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Listings kept in insertion order behind an async lock.
///
/// Ids come from the injected provider and are matched the way the store
/// matches them: hex is case-insensitive and malformed ids match nothing.
pub struct InMemoryJobListingRepository {
    listings: RwLock<Vec<JobListing>>,
    id_provider: Arc<dyn IdProvider>,
}

impl InMemoryJobListingRepository {
    pub fn new(id_provider: Arc<dyn IdProvider>) -> Self {
        Self {
            listings: RwLock::new(Vec::new()),
            id_provider,
        }
    }

    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }
}

impl Default for InMemoryJobListingRepository {
    fn default() -> Self {
        Self::new(Arc::new(HexIdProvider))
    }
}

#[async_trait]
impl JobListingRepository for InMemoryJobListingRepository {
    async fn get_job(&self, id: &str) -> Result<JobListing> {
        let key = normalize_listing_id(id);
        self.listings
            .read()
            .await
            .iter()
            .find(|listing| listing.id == key)
            .cloned()
            .ok_or_else(|| AppError::listing_not_found(id))
    }

    async fn get_jobs(&self) -> Result<Vec<JobListing>> {
        Ok(self.listings.read().await.clone())
    }

    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing> {
        let mut listings = self.listings.write().await;

        let generated = self.id_provider.generate_id();
        let id = normalize_listing_id(&generated);
        if id == NIL_LISTING_ID {
            return Err(AppError::Transport(format!(
                "malformed id generated: {}",
                generated
            )));
        }
        if listings.iter().any(|listing| listing.id == id) {
            return Err(AppError::Transport(format!("duplicate id generated: {}", id)));
        }

        let listing = JobListing::from_input(id, input);
        listings.push(listing.clone());

        tracing::debug!(id = %listing.id, "Job listing created in memory");
        Ok(listing)
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        let key = normalize_listing_id(id);
        let mut listings = self.listings.write().await;

        let listing = listings
            .iter_mut()
            .find(|listing| listing.id == key)
            .ok_or_else(|| AppError::listing_not_found(id))?;

        input.apply_to(listing);
        Ok(listing.clone())
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse> {
        let mut listings = self.listings.write().await;

        let key = normalize_listing_id(id);
        let before = listings.len();
        listings.retain(|listing| listing.id != key);
        tracing::debug!(id = %id, deleted = before - listings.len(), "Job listing delete issued");

        Ok(DeleteJobResponse::new(id))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
