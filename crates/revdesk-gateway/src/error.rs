//! Internal error types for gateway plumbing.
//!
//! Transport errors never reach callers directly; the classifier maps them
//! to `FailureKind::NetworkUnreachable`. `GatewayError` only covers
//! construction problems.

use std::time::Duration;

use thiserror::Error;

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// A call that produced no HTTP response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be built (bad header, unserializable body).
    #[error("Failed to build request: {message}")]
    Build {
        /// What was wrong with the request
        message: String,
    },

    /// The backend could not be reached or the connection broke.
    #[error("Backend unreachable: {message}")]
    Unreachable {
        /// Description from the HTTP client
        message: String,
    },

    /// No response arrived within the timeout.
    #[error("Request timed out after {}ms", after.as_millis())]
    Timeout {
        /// The timeout that elapsed
        after: Duration,
    },
}

/// Errors raised while constructing a gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The configured origin and base path do not form a valid URL.
    #[error("Invalid API base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be created.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
