//! Core domain types and port definitions for revdesk.
//!
//! This crate owns the vocabulary shared by the gateway, the notification
//! surface and the CLI: request descriptors, the closed failure taxonomy,
//! notification severities, the endpoint registry and API settings.
//! It contains no HTTP or UI implementation details.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod endpoints;
pub mod ports;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    EnvelopeVerdict, ErrorBody, Failure, FailureKind, HttpMethod, NotificationId,
    NotificationState, Outcome, QueryParams, RequestDescriptor, ResponseEnvelope, Severity,
};
pub use endpoints::Endpoint;
pub use ports::{NoopNotifier, NotifierPort};
pub use settings::{
    ApiSettings, DEFAULT_BASE_PATH, DEFAULT_ORIGIN, DEFAULT_SLOW_TIMEOUT_MS, DEFAULT_TIMEOUT_MS,
    SettingsError, validate_settings,
};

// mockall is used through `automock` on the notifier port in unit tests
#[cfg(test)]
use mockall as _;
