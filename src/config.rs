//! Host configuration from the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{BackendConfig, ConfigError};

pub const PORT_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostConfigError {
    #[error(transparent)]
    Backend(#[from] ConfigError),
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Clone, Debug)]
pub struct HostConfig {
    pub backend: BackendConfig,
    pub port: u16,
}

impl HostConfig {
    /// # Errors
    ///
    /// Fails when a backend parameter is missing or `PORT` is not a `u16`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HostConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = BackendConfig::from_lookup(&lookup)?;
        let port = match lookup(PORT_VAR).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse().map_err(|_| HostConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { backend, port })
    }

    /// # Errors
    ///
    /// See [`HostConfig::from_lookup`].
    pub fn from_env() -> Result<Self, HostConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}
