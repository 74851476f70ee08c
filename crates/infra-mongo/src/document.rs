// BSON Document Types & Mapping

use jobboard_core::domain::{
    normalize_listing_id, CreateJobListingInput, JobListing, UpdateJobListingInput,
    NIL_LISTING_ID,
};
use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Stored shape of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct JobListingDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

impl From<JobListingDocument> for JobListing {
    fn from(doc: JobListingDocument) -> Self {
        JobListing {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            url: doc.url,
            company: doc.company,
        }
    }
}

/// Insert shape: no `_id`, the store generates it
#[derive(Debug, Clone, Serialize)]
pub(crate) struct NewJobListingDocument {
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: String,
}

impl From<&CreateJobListingInput> for NewJobListingDocument {
    fn from(input: &CreateJobListingInput) -> Self {
        Self {
            title: input.title.clone(),
            description: input.description.clone(),
            url: input.url.clone(),
            company: input.company.clone(),
        }
    }
}

/// Parse a hex id through the shared normalization. Malformed input maps to
/// the nil ObjectId so the lookup simply matches nothing.
pub(crate) fn parse_object_id(id: &str) -> ObjectId {
    let normalized = normalize_listing_id(id);
    if normalized == NIL_LISTING_ID {
        tracing::debug!(id = %id, "Malformed listing id, matching nil ObjectId");
    }
    ObjectId::parse_str(&normalized).unwrap_or_else(|_| ObjectId::from_bytes([0; 12]))
}

pub(crate) fn id_filter(id: &str) -> Document {
    doc! { "_id": parse_object_id(id) }
}

/// `$set` document with only the present fields, or None if nothing is present
pub(crate) fn update_document(input: &UpdateJobListingInput) -> Option<Document> {
    if input.is_empty() {
        return None;
    }

    let mut set = Document::new();
    for (field, value) in input.present_fields() {
        set.insert(field, value);
    }

    Some(doc! { "$set": set })
}
