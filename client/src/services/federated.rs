//! "Continue with Google" for both the login and registration pages.

#[cfg(test)]
#[path = "federated_test.rs"]
mod federated_test;

use super::Feedback;
use super::messages::POPUP_BLOCKED;
use super::profile::federated_record;
use crate::net::identity::{AuthErrorCode, IdentityClient};
use crate::net::profile_store::ProfileStore;

/// Which page started the popup. Only the copy differs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FederatedIntent {
    SignIn,
    SignUp,
}

impl FederatedIntent {
    #[must_use]
    pub fn loading_message(self) -> &'static str {
        match self {
            Self::SignIn => "Signing in with Google...",
            Self::SignUp => "Signing up with Google...",
        }
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Google sign-in successful!",
            Self::SignUp => "Google registration successful!",
        }
    }

    #[must_use]
    pub fn cancelled_message(self) -> &'static str {
        match self {
            Self::SignIn => "Sign-in cancelled",
            Self::SignUp => "Sign-up cancelled",
        }
    }

    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::SignIn => "Google sign-in failed. Please try again.",
            Self::SignUp => "Google sign-up failed. Please try again.",
        }
    }

    /// `None` means stay silent.
    #[must_use]
    pub fn error_message(self, code: &AuthErrorCode) -> Option<&'static str> {
        match code {
            AuthErrorCode::CancelledPopupRequest => None,
            AuthErrorCode::PopupClosedByUser => Some(self.cancelled_message()),
            AuthErrorCode::PopupBlocked => Some(POPUP_BLOCKED),
            _ => Some(self.failure_message()),
        }
    }
}

/// Run the popup flow and merge the provider profile into the store.
///
/// Returns `None` when a second popup was requested while one was open; the
/// caller should then leave its loading toast to the first request.
pub async fn federated_sign_in(
    identity: &dyn IdentityClient,
    profiles: &dyn ProfileStore,
    intent: FederatedIntent,
) -> Option<Feedback> {
    let user = match identity.sign_in_federated().await {
        Ok(user) => user,
        Err(err) => {
            log::warn!("federated sign-in failed: {err}");
            return intent.error_message(&err.code).map(Feedback::error);
        }
    };

    let record = federated_record(&user);
    if let Err(err) = profiles.upsert(&user.uid, &record, true).await {
        log::error!("profile merge failed for {}: {err}", user.uid);
    }

    Some(Feedback::success(intent.success_message()))
}
