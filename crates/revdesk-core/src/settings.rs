//! API settings domain types and validation.
//!
//! Pure data describing how to reach the review backend. Adapters load it
//! from the environment or flags and hand it to the gateway.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default backend origin.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8000";

/// Default API base path appended to the origin.
pub const DEFAULT_BASE_PATH: &str = "/api";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Timeout for the operation that proxies to slow downstream validation.
pub const DEFAULT_SLOW_TIMEOUT_MS: u64 = 90_000;

/// Settings for reaching the review backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSettings {
    /// Scheme, host and port, e.g. `http://127.0.0.1:8000`.
    pub origin: String,

    /// Path prefix of every API call, e.g. `/api`.
    pub base_path: String,

    /// Default timeout for every call.
    pub timeout_ms: u64,

    /// Timeout for calls flagged as slow by the endpoint registry.
    pub slow_timeout_ms: u64,

    /// Headers sent with every call.
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            slow_timeout_ms: DEFAULT_SLOW_TIMEOUT_MS,
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
        }
    }
}

impl ApiSettings {
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub const fn slow_timeout(&self) -> Duration {
        Duration::from_millis(self.slow_timeout_ms)
    }

    /// Apply overrides from an environment lookup.
    ///
    /// Recognised keys: `REVDESK_API_ORIGIN`, `REVDESK_API_BASE_PATH`,
    /// `REVDESK_API_TIMEOUT_MS`, `REVDESK_API_SLOW_TIMEOUT_MS`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup("REVDESK_API_ORIGIN") {
            self.origin = origin;
        }
        if let Some(base_path) = lookup("REVDESK_API_BASE_PATH") {
            self.base_path = base_path;
        }
        if let Some(raw) = lookup("REVDESK_API_TIMEOUT_MS") {
            self.timeout_ms = parse_millis("REVDESK_API_TIMEOUT_MS", &raw)?;
        }
        if let Some(raw) = lookup("REVDESK_API_SLOW_TIMEOUT_MS") {
            self.slow_timeout_ms = parse_millis("REVDESK_API_SLOW_TIMEOUT_MS", &raw)?;
        }
        Ok(())
    }
}

fn parse_millis(key: &'static str, raw: &str) -> Result<u64, SettingsError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| SettingsError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("API origin must start with http:// or https://, got '{0}'")]
    InvalidOrigin(String),

    #[error("API base path must be empty or start with '/', got '{0}'")]
    InvalidBasePath(String),

    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("{key} must be a number of milliseconds, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Validate settings values.
pub fn validate_settings(settings: &ApiSettings) -> Result<(), SettingsError> {
    let origin = settings.origin.trim();
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(SettingsError::InvalidOrigin(settings.origin.clone()));
    }

    if !settings.base_path.is_empty() && !settings.base_path.starts_with('/') {
        return Err(SettingsError::InvalidBasePath(settings.base_path.clone()));
    }

    if settings.timeout_ms == 0 || settings.slow_timeout_ms == 0 {
        return Err(SettingsError::ZeroTimeout);
    }

    Ok(())
}
