//! Identity-provider seam: account operations plus the session observer.
//!
//! ERROR HANDLING
//! ==============
//! Every failure carries an `AuthErrorCode` in the provider's `auth/*`
//! vocabulary. Flows map codes to user-facing text; unmapped codes fall back to
//! a generic message, so `Other` keeps the raw code for logs only.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

use async_trait::async_trait;
use tokio::sync::watch;

use super::types::Identity;
use crate::state::session::Session;

/// Provider error codes the application distinguishes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    EmailAlreadyInUse,
    InvalidEmail,
    WeakPassword,
    OperationNotAllowed,
    UserNotFound,
    WrongPassword,
    TooManyRequests,
    InvalidCredential,
    UserDisabled,
    PopupClosedByUser,
    PopupBlocked,
    CancelledPopupRequest,
    NetworkRequestFailed,
    Internal,
    Other(String),
}

impl AuthErrorCode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::EmailAlreadyInUse => "auth/email-already-in-use",
            Self::InvalidEmail => "auth/invalid-email",
            Self::WeakPassword => "auth/weak-password",
            Self::OperationNotAllowed => "auth/operation-not-allowed",
            Self::UserNotFound => "auth/user-not-found",
            Self::WrongPassword => "auth/wrong-password",
            Self::TooManyRequests => "auth/too-many-requests",
            Self::InvalidCredential => "auth/invalid-credential",
            Self::UserDisabled => "auth/user-disabled",
            Self::PopupClosedByUser => "auth/popup-closed-by-user",
            Self::PopupBlocked => "auth/popup-blocked",
            Self::CancelledPopupRequest => "auth/cancelled-popup-request",
            Self::NetworkRequestFailed => "auth/network-request-failed",
            Self::Internal => "auth/internal-error",
            Self::Other(code) => code,
        }
    }

    /// Parse an `auth/*` code string.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "auth/email-already-in-use" => Self::EmailAlreadyInUse,
            "auth/invalid-email" => Self::InvalidEmail,
            "auth/weak-password" => Self::WeakPassword,
            "auth/operation-not-allowed" => Self::OperationNotAllowed,
            "auth/user-not-found" => Self::UserNotFound,
            "auth/wrong-password" => Self::WrongPassword,
            "auth/too-many-requests" => Self::TooManyRequests,
            "auth/invalid-credential" => Self::InvalidCredential,
            "auth/user-disabled" => Self::UserDisabled,
            "auth/popup-closed-by-user" => Self::PopupClosedByUser,
            "auth/popup-blocked" => Self::PopupBlocked,
            "auth/cancelled-popup-request" => Self::CancelledPopupRequest,
            "auth/network-request-failed" => Self::NetworkRequestFailed,
            "auth/internal-error" => Self::Internal,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Map an Identity Toolkit REST error message (`EMAIL_EXISTS`,
    /// `WEAK_PASSWORD : Password should be at least 6 characters`, ...).
    #[must_use]
    pub fn from_rest_message(message: &str) -> Self {
        let key = message.split(" : ").next().unwrap_or_default().trim();
        match key {
            "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "INVALID_EMAIL" | "MISSING_EMAIL" => Self::InvalidEmail,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "OPERATION_NOT_ALLOWED" | "PASSWORD_LOGIN_DISABLED" => Self::OperationNotAllowed,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => Self::UserNotFound,
            "INVALID_PASSWORD" => Self::WrongPassword,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyRequests,
            "INVALID_LOGIN_CREDENTIALS" | "INVALID_IDP_RESPONSE" | "INVALID_REFRESH_TOKEN" => {
                Self::InvalidCredential
            }
            "USER_DISABLED" => Self::UserDisabled,
            "" => Self::Internal,
            other => Self::Other(format!("auth/{}", other.to_ascii_lowercase().replace('_', "-"))),
        }
    }
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed identity-provider call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AuthError {
    pub code: AuthErrorCode,
    pub message: String,
}

impl AuthError {
    pub fn new(code: AuthErrorCode, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Build from a non-OK REST response body
    /// (`{"error": {"code": 400, "message": "EMAIL_EXISTS"}}`).
    #[must_use]
    pub fn from_rest_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            error: Detail,
        }
        #[derive(serde::Deserialize)]
        struct Detail {
            message: String,
        }

        match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => {
                let code = AuthErrorCode::from_rest_message(&envelope.error.message);
                Self::new(code, envelope.error.message)
            }
            Err(_) => Self::new(AuthErrorCode::Internal, format!("identity request failed: {status}")),
        }
    }

    #[must_use]
    pub fn network(detail: impl fmt::Display) -> Self {
        Self::new(AuthErrorCode::NetworkRequestFailed, detail.to_string())
    }
}

/// Identity provider operations.
///
/// Implementations own exactly one `SessionHub` and publish into it on sign-in,
/// sign-out and initial resolution; `observe_session` hands out receivers.
#[async_trait(?Send)]
pub trait IdentityClient: Send + Sync {
    /// Create an email/password account and sign it in.
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    /// Sign in through the Google popup.
    async fn sign_in_federated(&self) -> Result<Identity, AuthError>;

    async fn sign_out(&self);

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError>;

    /// Resolve any persisted session and publish the first non-`Unknown` value.
    async fn restore_session(&self);

    fn observe_session(&self) -> watch::Receiver<Session>;
}
