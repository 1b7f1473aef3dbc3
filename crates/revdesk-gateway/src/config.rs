//! Public configuration for the request gateway.
//!
//! This module provides a stable public API for configuring the gateway:
//! where the backend lives, how long calls may take, which headers go out
//! with every call and which text to show for each failure kind.

use std::time::Duration;

use revdesk_core::{ApiSettings, FailureKind};

/// Configuration for the request gateway.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use revdesk_gateway::{FailureMessages, GatewayConfig};
/// use std::time::Duration;
///
/// let config = GatewayConfig::new()
///     .with_origin("https://review.internal")
///     .with_timeout(Duration::from_secs(10))
///     .with_messages(FailureMessages::chinese());
/// ```
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Scheme, host and port of the backend
    pub(crate) origin: String,
    /// Path prefix prepended to every descriptor path
    pub(crate) base_path: String,
    /// Default request timeout
    pub(crate) timeout: Duration,
    /// Timeout for endpoints flagged as slow
    pub(crate) slow_timeout: Duration,
    /// Headers attached to every request
    pub(crate) headers: Vec<(String, String)>,
    /// Default failure text per kind
    pub(crate) messages: FailureMessages,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::from_settings(&ApiSettings::default())
    }
}

impl GatewayConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a configuration from API settings.
    #[must_use]
    pub fn from_settings(settings: &ApiSettings) -> Self {
        Self {
            origin: settings.origin.clone(),
            base_path: settings.base_path.clone(),
            timeout: settings.timeout(),
            slow_timeout: settings.slow_timeout(),
            headers: settings
                .headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            messages: FailureMessages::default(),
        }
    }

    /// Set the backend origin, e.g. `http://127.0.0.1:8000`.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Set the API base path. Defaults to `/api`.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the default request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout used by slow endpoints.
    ///
    /// Defaults to 90 seconds.
    #[must_use]
    pub const fn with_slow_timeout(mut self, timeout: Duration) -> Self {
        self.slow_timeout = timeout;
        self
    }

    /// Add or replace a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set the default failure messages.
    #[must_use]
    pub fn with_messages(mut self, messages: FailureMessages) -> Self {
        self.messages = messages;
        self
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    pub const fn slow_timeout(&self) -> Duration {
        self.slow_timeout
    }

    pub const fn messages(&self) -> &FailureMessages {
        &self.messages
    }
}

/// Default detail text for each failure kind.
///
/// Used whenever the response body carries no message of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessages {
    pub unauthorized: String,
    pub forbidden: String,
    pub not_found: String,
    pub server_error: String,
    /// Any other HTTP status.
    pub request_failed: String,
    pub network: String,
    /// A 2xx body that reports failure without a message.
    pub application: String,
}

impl Default for FailureMessages {
    fn default() -> Self {
        Self::english()
    }
}

impl FailureMessages {
    pub fn english() -> Self {
        Self {
            unauthorized: "Unauthorized, please sign in again".to_string(),
            forbidden: "Access denied".to_string(),
            not_found: "The requested address does not exist".to_string(),
            server_error: "Internal server error".to_string(),
            request_failed: "Request failed".to_string(),
            network: "Network connection failed".to_string(),
            application: "Operation failed".to_string(),
        }
    }

    pub fn chinese() -> Self {
        Self {
            unauthorized: "未授权，请重新登录".to_string(),
            forbidden: "拒绝访问".to_string(),
            not_found: "请求地址不存在".to_string(),
            server_error: "服务器内部错误".to_string(),
            request_failed: "请求失败".to_string(),
            network: "网络连接失败".to_string(),
            application: "操作失败".to_string(),
        }
    }

    /// The default text for a failure kind.
    pub fn for_kind(&self, kind: &FailureKind) -> &str {
        match kind {
            FailureKind::Unauthorized => &self.unauthorized,
            FailureKind::Forbidden => &self.forbidden,
            FailureKind::NotFound => &self.not_found,
            FailureKind::ServerError => &self.server_error,
            FailureKind::OtherHttp { .. } => &self.request_failed,
            FailureKind::NetworkUnreachable => &self.network,
            FailureKind::ApplicationError { .. } => &self.application,
        }
    }
}
