//! Firebase Authentication over the Identity Toolkit REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with `auth/internal-error`; the SSR
//! pass never signs anyone in.
//!
//! SESSION LIFECYCLE
//! =================
//! The refresh token is persisted in `localStorage`. `restore_session` trades
//! it for a fresh ID token and account lookup, then publishes `Present`, or
//! publishes `Absent` when there is nothing (valid) to restore. ID tokens are
//! refreshed a minute before expiry when the profile store asks for one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firebase_auth_test.rs"]
mod firebase_auth_test;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::watch;

use super::identity::{AuthError, AuthErrorCode, IdentityClient};
use super::popup;
use super::types::Identity;
use crate::config::BackendConfig;
use crate::state::session::{Session, SessionHub};
use crate::util::{storage, time};

pub const IDENTITY_TOOLKIT_BASE: &str = "https://identitytoolkit.googleapis.com/v1";
pub const SECURE_TOKEN_BASE: &str = "https://securetoken.googleapis.com/v1";
pub const GOOGLE_PROVIDER_ID: &str = "google.com";

const SESSION_STORAGE_KEY: &str = "menosense_auth_session";
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// What survives a page reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct StoredSession {
    uid: String,
    refresh_token: String,
}

/// Live credentials for the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TokenSet {
    pub uid: String,
    pub id_token: String,
    pub refresh_token: String,
    /// Unix seconds.
    pub expires_at: i64,
}

impl TokenSet {
    pub(crate) fn is_fresh(&self, now: i64) -> bool {
        self.expires_at - TOKEN_REFRESH_MARGIN_SECS > now
    }
}

/// `expiresIn` arrives as a decimal string of seconds.
pub(crate) fn parse_expires_in(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS)
}

/// Shared shape of `signUp`, `signInWithPassword` and `signInWithIdp`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountResponse {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: String,
}

impl AccountResponse {
    pub(crate) fn identity(&self) -> Identity {
        Identity {
            uid: self.local_id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            photo_url: self.photo_url.clone(),
        }
    }

    pub(crate) fn tokens(&self, now: i64) -> TokenSet {
        TokenSet {
            uid: self.local_id.clone(),
            id_token: self.id_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_at: now + parse_expires_in(&self.expires_in),
        }
    }
}

/// `securetoken` refresh response (snake_case, unlike the toolkit).
#[derive(Debug, Deserialize)]
pub(crate) struct RefreshResponse {
    pub id_token: String,
    pub refresh_token: String,
    pub user_id: String,
    #[serde(default)]
    pub expires_in: String,
}

impl RefreshResponse {
    pub(crate) fn tokens(&self, now: i64) -> TokenSet {
        TokenSet {
            uid: self.user_id.clone(),
            id_token: self.id_token.clone(),
            refresh_token: self.refresh_token.clone(),
            expires_at: now + parse_expires_in(&self.expires_in),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LookupUser {
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub users: Vec<LookupUser>,
}

impl LookupResponse {
    pub(crate) fn into_identity(self) -> Option<Identity> {
        let user = self.users.into_iter().next()?;
        Some(Identity {
            uid: user.local_id,
            email: user.email,
            display_name: user.display_name,
            photo_url: user.photo_url,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateAuthUriResponse {
    auth_uri: String,
    session_id: String,
}

/// Build an Identity Toolkit `accounts:{method}` URL.
#[must_use]
pub fn toolkit_endpoint(api_key: &str, method: &str) -> String {
    format!("{IDENTITY_TOOLKIT_BASE}/accounts:{method}?key={}", urlencoding::encode(api_key))
}

#[must_use]
pub fn token_endpoint(api_key: &str) -> String {
    format!("{SECURE_TOKEN_BASE}/token?key={}", urlencoding::encode(api_key))
}

/// `application/x-www-form-urlencoded` body for a refresh-token grant.
#[must_use]
pub fn refresh_form_body(refresh_token: &str) -> String {
    format!("grant_type=refresh_token&refresh_token={}", urlencoding::encode(refresh_token))
}

/// Identity client backed by Firebase Authentication.
pub struct FirebaseAuth {
    config: BackendConfig,
    hub: SessionHub,
    tokens: Mutex<Option<TokenSet>>,
    popup_pending: AtomicBool,
}

impl FirebaseAuth {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            hub: SessionHub::new(),
            tokens: Mutex::new(None),
            popup_pending: AtomicBool::new(false),
        }
    }

    fn token_guard(&self) -> MutexGuard<'_, Option<TokenSet>> {
        self.tokens.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn endpoint(&self, method: &str) -> String {
        toolkit_endpoint(&self.config.api_key, method)
    }

    /// Adopt new credentials and announce the signed-in identity.
    fn establish(&self, identity: Identity, tokens: TokenSet) -> Identity {
        storage::save_json(
            SESSION_STORAGE_KEY,
            &StoredSession { uid: tokens.uid.clone(), refresh_token: tokens.refresh_token.clone() },
        );
        *self.token_guard() = Some(tokens);
        self.hub.publish(Session::Present(identity.clone()));
        identity
    }

    fn establish_account(&self, account: &AccountResponse) -> Identity {
        self.establish(account.identity(), account.tokens(time::unix_now()))
    }

    fn clear(&self) {
        storage::remove(SESSION_STORAGE_KEY);
        *self.token_guard() = None;
        self.hub.publish(Session::Absent);
    }

    /// ID token for the signed-in user, refreshed if it is about to expire.
    ///
    /// # Errors
    ///
    /// Returns an error if nobody is signed in or the refresh is rejected.
    pub async fn fresh_id_token(&self) -> Result<String, AuthError> {
        let current = self.token_guard().clone();
        let Some(tokens) = current else {
            return Err(AuthError::new(AuthErrorCode::Other("auth/no-current-user".to_owned()), "not signed in"));
        };
        if tokens.is_fresh(time::unix_now()) {
            return Ok(tokens.id_token);
        }
        let renewed = self.refresh(&tokens.refresh_token).await?;
        let id_token = renewed.id_token.clone();
        storage::save_json(
            SESSION_STORAGE_KEY,
            &StoredSession { uid: renewed.uid.clone(), refresh_token: renewed.refresh_token.clone() },
        );
        *self.token_guard() = Some(renewed);
        Ok(id_token)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenSet, AuthError> {
        let resp: RefreshResponse =
            post_form(&token_endpoint(&self.config.api_key), refresh_form_body(refresh_token)).await?;
        Ok(resp.tokens(time::unix_now()))
    }

    async fn lookup(&self, id_token: &str) -> Result<Identity, AuthError> {
        let resp: LookupResponse = post_json(&self.endpoint("lookup"), &json!({ "idToken": id_token })).await?;
        resp.into_identity()
            .ok_or_else(|| AuthError::new(AuthErrorCode::UserNotFound, "USER_NOT_FOUND"))
    }

    async fn resume(&self, refresh_token: &str) -> Result<Identity, AuthError> {
        let tokens = self.refresh(refresh_token).await?;
        let identity = self.lookup(&tokens.id_token).await?;
        Ok(self.establish(identity, tokens))
    }

    async fn federated_flow(&self) -> Result<Identity, AuthError> {
        let continue_uri = popup::callback_url(&popup::current_origin()?);
        let created: CreateAuthUriResponse = post_json(
            &self.endpoint("createAuthUri"),
            &json!({ "providerId": GOOGLE_PROVIDER_ID, "continueUri": continue_uri }),
        )
        .await?;
        let request_uri = popup::run(&created.auth_uri).await?;
        let account: AccountResponse = post_json(
            &self.endpoint("signInWithIdp"),
            &json!({
                "requestUri": request_uri,
                "sessionId": created.session_id,
                "returnSecureToken": true,
                "returnIdpCredential": true,
            }),
        )
        .await?;
        Ok(self.establish_account(&account))
    }
}

#[async_trait(?Send)]
impl IdentityClient for FirebaseAuth {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let account: AccountResponse = post_json(
            &self.endpoint("signUp"),
            &json!({ "email": email, "password": password, "returnSecureToken": true }),
        )
        .await?;
        log::info!("account created for {}", account.local_id);
        Ok(self.establish_account(&account))
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let account: AccountResponse = post_json(
            &self.endpoint("signInWithPassword"),
            &json!({ "email": email, "password": password, "returnSecureToken": true }),
        )
        .await?;
        Ok(self.establish_account(&account))
    }

    async fn sign_in_federated(&self) -> Result<Identity, AuthError> {
        if self.popup_pending.swap(true, Ordering::SeqCst) {
            return Err(AuthError::new(AuthErrorCode::CancelledPopupRequest, "a sign-in popup is already open"));
        }
        let result = self.federated_flow().await;
        self.popup_pending.store(false, Ordering::SeqCst);
        result
    }

    async fn sign_out(&self) {
        self.clear();
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), AuthError> {
        let _: serde_json::Value = post_json(
            &self.endpoint("sendOobCode"),
            &json!({ "requestType": "PASSWORD_RESET", "email": email }),
        )
        .await?;
        Ok(())
    }

    async fn restore_session(&self) {
        let Some(stored) = storage::load_json::<StoredSession>(SESSION_STORAGE_KEY) else {
            self.hub.publish(Session::Absent);
            return;
        };
        match self.resume(&stored.refresh_token).await {
            Ok(identity) => log::info!("restored session for {}", identity.uid),
            Err(err) => {
                log::warn!("session restore failed for {}: {err}", stored.uid);
                self.clear();
            }
        }
    }

    fn observe_session(&self) -> watch::Receiver<Session> {
        self.hub.subscribe()
    }
}

async fn post_json<R: DeserializeOwned>(url: &str, body: &serde_json::Value) -> Result<R, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(AuthError::network)?
            .send()
            .await
            .map_err(AuthError::network)?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(server_unavailable())
    }
}

async fn post_form<R: DeserializeOwned>(url: &str, form: String) -> Result<R, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(form)
            .map_err(AuthError::network)?
            .send()
            .await
            .map_err(AuthError::network)?;
        read_response(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, form);
        Err(server_unavailable())
    }
}

#[cfg(feature = "hydrate")]
async fn read_response<R: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<R, AuthError> {
    if !resp.ok() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        return Err(AuthError::from_rest_body(status, &text));
    }
    resp.json::<R>()
        .await
        .map_err(|e| AuthError::new(AuthErrorCode::Internal, e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_unavailable() -> AuthError {
    AuthError::new(AuthErrorCode::Internal, "identity backend not available on server")
}
