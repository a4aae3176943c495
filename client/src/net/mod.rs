//! Backend access: identity provider and profile document store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `identity` and `profile_store` define the seams the flows depend on;
//! `firebase_auth`, `popup` and `firestore` implement them over the hosted
//! backend's REST surface; `types` defines the shared DTOs.

pub mod firebase_auth;
pub mod firestore;
pub mod identity;
pub mod popup;
pub mod profile_store;
pub mod types;

use std::sync::Arc;

use crate::config::BackendConfig;
use firebase_auth::FirebaseAuth;
use firestore::FirestoreProfiles;
use identity::IdentityClient;
use profile_store::ProfileStore;

/// The two backend services, provided to pages through context.
#[derive(Clone)]
pub struct Backend {
    pub identity: Arc<dyn IdentityClient>,
    pub profiles: Arc<dyn ProfileStore>,
}

impl Backend {
    /// Wire Firebase Authentication and Firestore from one config.
    #[must_use]
    pub fn firebase(config: BackendConfig) -> Self {
        let project_id = config.project_id.clone();
        let auth = Arc::new(FirebaseAuth::new(config));
        let profiles = Arc::new(FirestoreProfiles::new(project_id, auth.clone()));
        Self { identity: auth, profiles }
    }
}
