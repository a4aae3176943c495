//! Profile-document seam.

use async_trait::async_trait;

use super::types::ProfileRecord;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no signed-in user to authorize the write")]
    Unauthenticated,
    #[error("store request failed: {0}")]
    Http(String),
    #[error("store rejected write ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("profile store not available: {0}")]
    Unavailable(String),
}

/// Keyed upsert of user profile documents.
#[async_trait(?Send)]
pub trait ProfileStore: Send + Sync {
    /// Write `record` at key `id`. With `merge`, only the record's fields are
    /// touched and any other stored fields survive; without it the document is
    /// replaced.
    async fn upsert(&self, id: &str, record: &ProfileRecord, merge: bool) -> Result<(), StoreError>;
}
