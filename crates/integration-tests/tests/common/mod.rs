//! Behaviour checks shared by every JobListingRepository adapter

#![allow(dead_code)]

use jobboard_core::domain::{CreateJobListingInput, UpdateJobListingInput};
use jobboard_core::port::JobListingRepository;
use std::collections::HashSet;

pub fn engineer_input() -> CreateJobListingInput {
    CreateJobListingInput {
        title: "Engineer".to_string(),
        description: "Build things".to_string(),
        url: "http://x".to_string(),
        company: "Acme".to_string(),
    }
}

pub fn numbered_input(i: usize) -> CreateJobListingInput {
    CreateJobListingInput {
        title: format!("Role {}", i),
        description: format!("Description {}", i),
        url: format!("http://jobs.example/{}", i),
        company: format!("Company {}", i),
    }
}

/// Create echoes the input and assigns a fresh, non-empty id
pub async fn create_assigns_unused_ids(repo: &dyn JobListingRepository) {
    let mut seen = HashSet::new();

    for i in 0..20 {
        let input = numbered_input(i);
        let created = repo.create_job_listing(input.clone()).await.unwrap();

        assert!(!created.id.is_empty());
        assert!(seen.insert(created.id.clone()), "id reused: {}", created.id);
        assert_eq!(created.title, input.title);
        assert_eq!(created.description, input.description);
        assert_eq!(created.url, input.url);
        assert_eq!(created.company, input.company);
    }
}

/// The documented create scenario
pub async fn create_engineer_scenario(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.title, "Engineer");
    assert_eq!(created.description, "Build things");
    assert_eq!(created.url, "http://x");
    assert_eq!(created.company, "Acme");
}

/// Reading back a created id returns the same listing
pub async fn get_returns_created(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();
    let fetched = repo.get_job(&created.id).await.unwrap();
    assert_eq!(fetched, created);
}

/// Title-only update leaves the other fields alone
pub async fn title_only_update(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();

    let updated = repo
        .update_job_listing(
            &created.id,
            UpdateJobListingInput {
                title: Some("Principal Engineer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Principal Engineer");
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.url, created.url);
    assert_eq!(updated.company, created.company);

    let fetched = repo.get_job(&created.id).await.unwrap();
    assert_eq!(fetched, updated);
}

/// Empty update returns the record unchanged
pub async fn empty_update_is_noop(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();
    let updated = repo
        .update_job_listing(&created.id, UpdateJobListingInput::default())
        .await
        .unwrap();
    assert_eq!(updated, created);
}

/// Updating an unknown id is not found
pub async fn update_unknown_is_not_found(repo: &dyn JobListingRepository) {
    let result = repo
        .update_job_listing(
            "000000000000000000000000",
            UpdateJobListingInput {
                url: Some("http://y".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(result.unwrap_err().is_not_found());
}

/// Delete then get is not found
pub async fn delete_then_get_is_not_found(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();

    let response = repo.delete_job_listing(&created.id).await.unwrap();
    assert_eq!(response.deleted_job_id, created.id);

    let result = repo.get_job(&created.id).await;
    assert!(result.unwrap_err().is_not_found());
}

/// Delete echoes ids that never existed
pub async fn delete_unknown_echoes(repo: &dyn JobListingRepository) {
    let response = repo.delete_job_listing("no-such-listing").await.unwrap();
    assert_eq!(response.deleted_job_id, "no-such-listing");
}

/// Malformed ids are not found, not a format error
pub async fn malformed_id_is_not_found(repo: &dyn JobListingRepository) {
    let result = repo.get_job("not-a-valid-id-format").await;
    assert!(result.unwrap_err().is_not_found());
}

/// get_jobs length tracks creates and deletes one-for-one
pub async fn list_length_tracks_mutations(repo: &dyn JobListingRepository) {
    let start = repo.get_jobs().await.unwrap().len();

    let mut ids = Vec::new();
    for i in 0..3 {
        let created = repo.create_job_listing(numbered_input(i)).await.unwrap();
        ids.push(created.id);
        assert_eq!(repo.get_jobs().await.unwrap().len(), start + i + 1);
    }

    for (i, id) in ids.iter().enumerate() {
        repo.delete_job_listing(id).await.unwrap();
        assert_eq!(repo.get_jobs().await.unwrap().len(), start + ids.len() - i - 1);
    }
}

/// Ids match case-insensitively, as hex encodings of the store id
pub async fn uppercase_id_is_found(repo: &dyn JobListingRepository) {
    let created = repo.create_job_listing(engineer_input()).await.unwrap();
    let upper = created.id.to_uppercase();

    let fetched = repo.get_job(&upper).await.unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update_job_listing(
            &upper,
            UpdateJobListingInput {
                description: Some("Build more things".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description, "Build more things");

    repo.delete_job_listing(&upper).await.unwrap();
    assert!(repo.get_job(&created.id).await.unwrap_err().is_not_found());
}
