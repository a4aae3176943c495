use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;

use super::*;
use crate::net::identity::{AuthError, AuthErrorCode, IdentityClient};
use crate::net::types::Identity;
use crate::services::mock::{MockIdentity, MockProfiles};
use crate::state::session::Session;
use crate::state::toast::ToastKind;

/// Records the page's busy flag at the moment the popup is requested.
struct BusyWatch {
    inner: MockIdentity,
    busy: RwSignal<bool>,
    seen: Mutex<Option<bool>>,
}

#[async_trait(?Send)]
impl IdentityClient for BusyWatch {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.inner.sign_up(email, password).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.inner.sign_in(email, password).await
    }

    async fn sign_in_federated(&self) -> Result<Identity, AuthError> {
        *self.seen.lock().unwrap() = Some(self.busy.get_untracked());
        self.inner.sign_in_federated().await
    }

    async fn sign_out(&self) {
        self.inner.sign_out().await;
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        self.inner.send_password_reset(email).await
    }

    async fn restore_session(&self) {}

    fn observe_session(&self) -> watch::Receiver<Session> {
        self.inner.observe_session()
    }
}

fn backend_with(inner: MockIdentity, busy: RwSignal<bool>) -> (Backend, Arc<BusyWatch>) {
    let recorder = Arc::new(BusyWatch { inner, busy, seen: Mutex::new(None) });
    let backend = Backend { identity: recorder.clone(), profiles: Arc::new(MockProfiles::default()) };
    (backend, recorder)
}

#[tokio::test]
async fn busy_is_held_while_popup_is_open() {
    let busy = RwSignal::new(false);
    let toasts = RwSignal::new(ToastState::default());
    let (backend, recorder) = backend_with(MockIdentity::signed_out(), busy);

    run_google_sign_in(backend, FederatedIntent::SignIn, busy, toasts).await;

    assert_eq!(*recorder.seen.lock().unwrap(), Some(true));
    assert!(!busy.get_untracked());
    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].text, "Google sign-in successful!");
}

#[tokio::test]
async fn busy_is_released_after_failure() {
    let busy = RwSignal::new(false);
    let toasts = RwSignal::new(ToastState::default());
    let (backend, recorder) = backend_with(MockIdentity::failing(AuthErrorCode::PopupClosedByUser), busy);

    run_google_sign_in(backend, FederatedIntent::SignUp, busy, toasts).await;

    assert_eq!(*recorder.seen.lock().unwrap(), Some(true));
    assert!(!busy.get_untracked());
    let state = toasts.get_untracked();
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].text, "Sign-up cancelled");
}
