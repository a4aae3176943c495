//! Cloud Firestore profile store over the REST API.
//!
//! A merge write sends `updateMask.fieldPaths` for exactly the record's fields
//! so untouched fields survive; an overwrite sends no mask and replaces the
//! document. Writes are authorized with the signed-in user's ID token.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::firebase_auth::FirebaseAuth;
use super::profile_store::{ProfileStore, StoreError};
use super::types::ProfileRecord;

pub const FIRESTORE_BASE: &str = "https://firestore.googleapis.com/v1";
pub const PROFILE_COLLECTION: &str = "users";

/// REST resource URL of `{collection}/{id}` in the default database.
#[must_use]
pub fn document_url(project_id: &str, collection: &str, id: &str) -> String {
    format!(
        "{FIRESTORE_BASE}/projects/{}/databases/(default)/documents/{collection}/{}",
        urlencoding::encode(project_id),
        urlencoding::encode(id)
    )
}

/// Query string restricting a PATCH to `fields`.
#[must_use]
pub fn update_mask_query(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("updateMask.fieldPaths={f}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Full PATCH URL for writing `record` at `id`.
#[must_use]
pub fn write_url(project_id: &str, id: &str, record: &ProfileRecord, merge: bool) -> String {
    let base = document_url(project_id, PROFILE_COLLECTION, id);
    if merge {
        format!("{base}?{}", update_mask_query(&record.field_names()))
    } else {
        base
    }
}

/// Firestore `Document` body with every field as a `stringValue`.
#[must_use]
pub fn encode_document(record: &ProfileRecord) -> Value {
    let fields: Map<String, Value> = record
        .fields()
        .into_iter()
        .map(|(name, value)| (name.to_owned(), json!({ "stringValue": value })))
        .collect();
    json!({ "fields": fields })
}

/// Profile store backed by the `users` collection.
pub struct FirestoreProfiles {
    project_id: String,
    auth: Arc<FirebaseAuth>,
}

impl FirestoreProfiles {
    #[must_use]
    pub fn new(project_id: impl Into<String>, auth: Arc<FirebaseAuth>) -> Self {
        Self { project_id: project_id.into(), auth }
    }
}

#[async_trait(?Send)]
impl ProfileStore for FirestoreProfiles {
    async fn upsert(&self, id: &str, record: &ProfileRecord, merge: bool) -> Result<(), StoreError> {
        let token = self
            .auth
            .fresh_id_token()
            .await
            .map_err(|_| StoreError::Unauthenticated)?;
        let url = write_url(&self.project_id, id, record, merge);
        let body = encode_document(record);

        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(&url)
                .header("Authorization", &format!("Bearer {token}"))
                .json(&body)
                .map_err(|e| StoreError::Http(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Http(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let message = resp.text().await.unwrap_or_default();
                return Err(StoreError::Rejected { status, message });
            }
            log::debug!("profile {id} written (merge={merge})");
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, url, body);
            Err(StoreError::Unavailable("not available on server".to_owned()))
        }
    }
}
