// MongoDB JobListingRepository Implementation

use crate::connection;
use crate::document::{id_filter, update_document, JobListingDocument, NewJobListingDocument};
use crate::error_map::map_mongo_error;
use crate::scope::scoped;
use async_trait::async_trait;
use futures::TryStreamExt;
use jobboard_core::domain::{
    CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput,
};
use jobboard_core::port::JobListingRepository;
use jobboard_core::{AppError, Result, StoreConfig};
use mongodb::bson::doc;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use std::time::Duration;

/// Listing repository over one MongoDB collection.
///
/// Cloning is cheap: clones share the client's connection pool.
#[derive(Clone)]
pub struct MongoJobListingRepository {
    client: Client,
    collection: Collection<JobListingDocument>,
    operation_timeout: Duration,
}

impl MongoJobListingRepository {
    /// Wrap an already-connected client
    pub fn new(client: Client, config: &StoreConfig) -> Self {
        let collection = client
            .database(&config.database)
            .collection::<JobListingDocument>(&config.collection);

        Self {
            client,
            collection,
            operation_timeout: config.operation_timeout(),
        }
    }

    /// Connect, ping, and wrap the client
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let client = connection::connect(config).await?;
        Ok(Self::new(client, config))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Close the connection pool
    pub async fn shutdown(self) {
        let Self {
            client, collection, ..
        } = self;
        drop(collection);
        client.shutdown().await;
        tracing::info!("Store connection closed");
    }

    async fn find_by_id(&self, id: &str) -> Result<JobListing> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?
            .map(JobListing::from)
            .ok_or_else(|| AppError::listing_not_found(id))
    }
}

#[async_trait]
impl JobListingRepository for MongoJobListingRepository {
    async fn get_job(&self, id: &str) -> Result<JobListing> {
        tracing::debug!(id = %id, "Fetching job listing");
        scoped("get_job", self.operation_timeout, self.find_by_id(id)).await
    }

    async fn get_jobs(&self) -> Result<Vec<JobListing>> {
        let listings = scoped("get_jobs", self.operation_timeout, async {
            let cursor = self
                .collection
                .find(doc! {})
                .await
                .map_err(map_mongo_error)?;

            let documents: Vec<JobListingDocument> =
                cursor.try_collect().await.map_err(map_mongo_error)?;

            Ok(documents.into_iter().map(JobListing::from).collect::<Vec<_>>())
        })
        .await?;

        tracing::debug!(count = listings.len(), "Fetched job listings");
        Ok(listings)
    }

    async fn create_job_listing(&self, input: CreateJobListingInput) -> Result<JobListing> {
        let inserted = scoped("create_job_listing", self.operation_timeout, async {
            self.collection
                .clone_with_type::<NewJobListingDocument>()
                .insert_one(NewJobListingDocument::from(&input))
                .await
                .map_err(map_mongo_error)
        })
        .await?;

        let id = inserted
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                AppError::Decode(format!(
                    "inserted id is not an ObjectId: {}",
                    inserted.inserted_id
                ))
            })?
            .to_hex();

        tracing::info!(id = %id, title = %input.title, "Job listing created");
        Ok(JobListing::from_input(id, input))
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing> {
        let Some(update) = update_document(&input) else {
            tracing::debug!(id = %id, "Empty update, returning current listing");
            return self.get_job(id).await;
        };

        let updated = scoped("update_job_listing", self.operation_timeout, async {
            self.collection
                .find_one_and_update(id_filter(id), update)
                .return_document(ReturnDocument::After)
                .await
                .map_err(map_mongo_error)
        })
        .await?
        .ok_or_else(|| AppError::listing_not_found(id))?;

        tracing::info!(id = %id, "Job listing updated");
        Ok(updated.into())
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse> {
        let result = scoped("delete_job_listing", self.operation_timeout, async {
            self.collection
                .delete_one(id_filter(id))
                .await
                .map_err(map_mongo_error)
        })
        .await?;

        tracing::debug!(id = %id, deleted = result.deleted_count, "Job listing delete issued");
        Ok(DeleteJobResponse::new(id))
    }

    async fn ping(&self) -> Result<()> {
        scoped("ping", self.operation_timeout, connection::ping(&self.client)).await
    }
}
