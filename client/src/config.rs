//! Backend connection parameters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host reads these from its environment and renders them into `<meta>`
//! tags of the SSR shell; the browser build reads the same tags back. Both
//! sides go through `BackendConfig::from_lookup` so the rules match.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::*;

pub const API_KEY_VAR: &str = "FIREBASE_API_KEY";
pub const AUTH_DOMAIN_VAR: &str = "FIREBASE_AUTH_DOMAIN";
pub const PROJECT_ID_VAR: &str = "FIREBASE_PROJECT_ID";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing backend parameter {0}")]
    Missing(&'static str),
}

/// Opaque connection parameters for the hosted identity + document backend.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_key: String,
    /// Carried through to the browser and logs only. The REST clients address
    /// the backend by API key and project id, and the popup returns to this
    /// site's own `/auth/callback` rather than a handler on this domain.
    pub auth_domain: String,
    pub project_id: String,
}

impl BackendConfig {
    /// Build from a key lookup. `auth_domain` defaults to
    /// `{project_id}.firebaseapp.com`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` when the API key or project id is absent
    /// or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };
        let api_key = read(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let project_id = read(PROJECT_ID_VAR).ok_or(ConfigError::Missing(PROJECT_ID_VAR))?;
        let auth_domain = read(AUTH_DOMAIN_VAR).unwrap_or_else(|| format!("{project_id}.firebaseapp.com"));
        Ok(Self { api_key, auth_domain, project_id })
    }

    /// Load from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the `<meta>` tags rendered by [`BackendMeta`].
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_lookup`]. Outside the browser every parameter
    /// is missing.
    pub fn from_document() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            #[cfg(feature = "hydrate")]
            {
                let doc = web_sys::window()?.document()?;
                let el = doc.query_selector(&format!("meta[name=\"{}\"]", meta_name(key))).ok()??;
                el.get_attribute("content")
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = key;
                None
            }
        })
    }
}

/// `<meta>` name used for an environment key.
#[must_use]
pub fn meta_name(key: &str) -> String {
    format!("menosense:{}", key.to_ascii_lowercase().replace('_', "-"))
}

/// Render backend parameters into the document head for the browser build.
#[component]
pub fn BackendMeta(config: BackendConfig) -> impl IntoView {
    view! {
        <meta name=meta_name(API_KEY_VAR) content=config.api_key/>
        <meta name=meta_name(AUTH_DOMAIN_VAR) content=config.auth_domain/>
        <meta name=meta_name(PROJECT_ID_VAR) content=config.project_id/>
    }
}
