// Job Listing Domain Model

use serde::{Deserialize, Serialize};

/// Job listing ID (hex encoding of the store's native identifier)
pub type JobListingId = String;

/// Length of a listing id in hex chars (12 bytes)
pub const LISTING_ID_LEN: usize = 24;

/// Id that never matches a stored listing
pub const NIL_LISTING_ID: &str = "000000000000000000000000";

/// Canonical form of a caller-supplied id.
///
/// Valid ids are 24 hex chars in any case and come back lowercased. Anything
/// else maps to `NIL_LISTING_ID`, so lookups match nothing instead of failing.
pub fn normalize_listing_id(id: &str) -> JobListingId {
    if id.len() == LISTING_ID_LEN && id.chars().all(|c| c.is_ascii_hexdigit()) {
        id.to_ascii_lowercase()
    } else {
        NIL_LISTING_ID.to_string()
    }
}

/// Job Listing Entity
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: JobListingId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

impl JobListing {
    /// Combine a store-assigned id with the fields of a create request
    pub fn from_input(id: impl Into<JobListingId>, input: CreateJobListingInput) -> Self {
        Self {
            id: id.into(),
            title: input.title,
            description: input.description,
            url: input.url,
            company: input.company,
        }
    }
}

/// Input for creating a listing (the store assigns the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobListingInput {
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

/// Partial update: `None` leaves the field unchanged.
///
/// `company` is not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobListingInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl UpdateJobListingInput {
    /// Present fields as (name, value) pairs, in declaration order
    pub fn present_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("title", self.title.as_deref()),
            ("description", self.description.as_deref()),
            ("url", self.url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    /// True when no field is present (presence, not emptiness)
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.url.is_none()
    }

    /// Apply present fields to an existing listing
    pub fn apply_to(&self, listing: &mut JobListing) {
        if let Some(title) = &self.title {
            listing.title = title.clone();
        }
        if let Some(description) = &self.description {
            listing.description = description.clone();
        }
        if let Some(url) = &self.url {
            listing.url = url.clone();
        }
    }
}

/// Delete acknowledgement. Echoes the requested id; does not prove a record existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    #[serde(rename = "deletedJobId")]
    pub deleted_job_id: JobListingId,
}

impl DeleteJobResponse {
    pub fn new(deleted_job_id: impl Into<JobListingId>) -> Self {
        Self {
            deleted_job_id: deleted_job_id.into(),
        }
    }
}
