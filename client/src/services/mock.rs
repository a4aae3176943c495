//! In-memory backends for flow tests.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::net::identity::{AuthError, AuthErrorCode, IdentityClient};
use crate::net::profile_store::{ProfileStore, StoreError};
use crate::net::types::{Identity, ProfileRecord};
use crate::state::session::{Session, SessionHub};

pub(crate) fn jane() -> Identity {
    Identity {
        uid: "u-jane".to_owned(),
        email: Some("jane@example.com".to_owned()),
        display_name: Some("Jane Doe".to_owned()),
        photo_url: Some("https://example.com/jane.png".to_owned()),
    }
}

/// Identity client that records calls and fails with a fixed code when set.
pub(crate) struct MockIdentity {
    pub hub: SessionHub,
    pub identity: Identity,
    pub failure: Option<AuthErrorCode>,
    pub calls: Mutex<Vec<String>>,
}

impl MockIdentity {
    pub(crate) fn signed_out() -> Self {
        let hub = SessionHub::new();
        hub.publish(Session::Absent);
        Self { hub, identity: jane(), failure: None, calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn failing(code: AuthErrorCode) -> Self {
        Self { failure: Some(code), ..Self::signed_out() }
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), AuthError> {
        self.calls.lock().unwrap().push(call.to_owned());
        match &self.failure {
            Some(code) => Err(AuthError::new(code.clone(), code.as_str())),
            None => Ok(()),
        }
    }

    fn sign_in_as(&self) -> Identity {
        self.hub.publish(Session::Present(self.identity.clone()));
        self.identity.clone()
    }
}

#[async_trait(?Send)]
impl IdentityClient for MockIdentity {
    async fn sign_up(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        self.record(&format!("sign_up:{email}"))?;
        Ok(self.sign_in_as())
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Identity, AuthError> {
        self.record(&format!("sign_in:{email}"))?;
        Ok(self.sign_in_as())
    }

    async fn sign_in_federated(&self) -> Result<Identity, AuthError> {
        self.record("sign_in_federated")?;
        Ok(self.sign_in_as())
    }

    async fn sign_out(&self) {
        let _ = self.record("sign_out");
        self.hub.publish(Session::Absent);
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.record(&format!("send_password_reset:{email}"))
    }

    async fn restore_session(&self) {}

    fn observe_session(&self) -> watch::Receiver<Session> {
        self.hub.subscribe()
    }
}

/// Profile store that keeps every write, or rejects them all.
#[derive(Default)]
pub(crate) struct MockProfiles {
    pub reject: bool,
    pub writes: Mutex<Vec<(String, ProfileRecord, bool)>>,
}

impl MockProfiles {
    pub(crate) fn rejecting() -> Self {
        Self { reject: true, ..Self::default() }
    }

    pub(crate) fn writes(&self) -> Vec<(String, ProfileRecord, bool)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ProfileStore for MockProfiles {
    async fn upsert(&self, id: &str, record: &ProfileRecord, merge: bool) -> Result<(), StoreError> {
        if self.reject {
            return Err(StoreError::Rejected { status: 403, message: "PERMISSION_DENIED".to_owned() });
        }
        self.writes.lock().unwrap().push((id.to_owned(), record.clone(), merge));
        Ok(())
    }
}
