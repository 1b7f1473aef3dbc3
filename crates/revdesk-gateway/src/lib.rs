//! Request gateway for the revdesk review console.
//!
//! Every outbound call to the review backend passes through
//! [`Gateway::execute`]. The gateway attaches the default configuration,
//! classifies the response into the closed [`FailureKind`] taxonomy and pushes
//! one error notification per failure through the core `NotifierPort`.
//!
//! The admin API wrappers (`statistics`, `reviews`, `projects`...) are thin
//! methods on [`Gateway`] that resolve an endpoint and call `execute`.
//!
//! [`FailureKind`]: revdesk_core::FailureKind

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod classify;
mod client;
mod config;
mod error;
mod http;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Gateway
pub use client::{DefaultGateway, Gateway};

// Configuration
pub use config::{FailureMessages, GatewayConfig};

// Errors
pub use error::{GatewayError, TransportError, TransportResult};

// Transport seam
pub use http::{HttpBackend, PreparedRequest, RawResponse, ReqwestBackend};

// Fake backend for tests in this and downstream crates
#[cfg(any(test, feature = "test-utils"))]
pub use http::testing;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
#[cfg(test)]
use revdesk_notify as _;
#[cfg(test)]
use tokio_test as _;
