//! Repository behaviour against a running MongoDB
//!
//! Run with a disposable server:
//!
//! ```text
//! JOBBOARD_TEST_MONGODB_URI=mongodb://localhost:27017 \
//!     cargo test -p jobboard-integration-tests --test mongo_live -- --ignored
//! ```
//!
//! Each test works in its own collection, dropped before and after the test.

mod common;

use jobboard_core::port::JobListingRepository;
use jobboard_core::{AppError, StoreConfig};
use jobboard_infra_mongo::MongoJobListingRepository;

const URI_VAR: &str = "JOBBOARD_TEST_MONGODB_URI";

fn live_config(name: &str) -> StoreConfig {
    let uri = std::env::var(URI_VAR).unwrap_or_else(|_| panic!("{} must be set", URI_VAR));
    StoreConfig {
        uri,
        database: "graphql-job-board-test".to_string(),
        collection: format!("jobs_{}", name),
        ..Default::default()
    }
}

async fn drop_collection(repo: &MongoJobListingRepository, config: &StoreConfig) {
    repo.client()
        .database(&config.database)
        .collection::<jobboard_infra_mongo::bson::Document>(&config.collection)
        .drop()
        .await
        .unwrap();
}

/// Runs `check` on a fresh collection, drops it again and closes the client
async fn with_live_repo<F, Fut>(name: &str, check: F)
where
    F: FnOnce(MongoJobListingRepository) -> Fut,
    Fut: std::future::Future<Output = MongoJobListingRepository>,
{
    let config = live_config(name);
    let repo = MongoJobListingRepository::connect(&config).await.unwrap();
    drop_collection(&repo, &config).await;

    let repo = check(repo).await;

    drop_collection(&repo, &config).await;
    repo.shutdown().await;
}

#[tokio::test]
#[ignore = "requires JOBBOARD_TEST_MONGODB_URI"]
async fn test_live_create_and_get() {
    with_live_repo("create_and_get", |repo| async move {
        common::create_engineer_scenario(&repo).await;
        common::create_assigns_unused_ids(&repo).await;
        common::get_returns_created(&repo).await;
        repo
    })
    .await;
}

#[tokio::test]
#[ignore = "requires JOBBOARD_TEST_MONGODB_URI"]
async fn test_live_updates() {
    with_live_repo("updates", |repo| async move {
        common::title_only_update(&repo).await;
        common::empty_update_is_noop(&repo).await;
        common::update_unknown_is_not_found(&repo).await;
        repo
    })
    .await;
}

#[tokio::test]
#[ignore = "requires JOBBOARD_TEST_MONGODB_URI"]
async fn test_live_deletes_and_listing() {
    with_live_repo("deletes", |repo| async move {
        common::delete_then_get_is_not_found(&repo).await;
        common::delete_unknown_echoes(&repo).await;
        common::list_length_tracks_mutations(&repo).await;
        repo
    })
    .await;
}

#[tokio::test]
#[ignore = "requires JOBBOARD_TEST_MONGODB_URI"]
async fn test_live_malformed_id() {
    with_live_repo("malformed", |repo| async move {
        common::malformed_id_is_not_found(&repo).await;
        common::uppercase_id_is_found(&repo).await;
        repo.ping().await.unwrap();
        repo
    })
    .await;
}

/// Nothing listens on port 1, so connect must fail within the bound
#[tokio::test]
async fn test_unreachable_store_is_connection_error() {
    let config = StoreConfig {
        uri: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
        connect_timeout_secs: 1,
        ..Default::default()
    };

    let result = MongoJobListingRepository::connect(&config).await;
    assert!(matches!(result, Err(AppError::Connection(_))));
}
