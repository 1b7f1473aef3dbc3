//! Gateway outcomes and the closed failure taxonomy.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Result of one gateway call: the unwrapped payload or a classified failure.
pub type Outcome<T = Value> = Result<T, Failure>;

/// Classification of a gateway failure.
///
/// The set is closed: every failure path of the gateway lands in exactly one
/// of these variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// HTTP 401.
    Unauthorized,
    /// HTTP 403.
    Forbidden,
    /// HTTP 404.
    NotFound,
    /// HTTP 500.
    ServerError,
    /// Any other non-2xx status.
    OtherHttp { status: u16 },
    /// No HTTP response at all (refused, DNS, timeout).
    NetworkUnreachable,
    /// A 2xx response whose body reports a logical failure.
    ApplicationError { message: String },
}

impl FailureKind {
    /// Classify a non-2xx HTTP status.
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500 => Self::ServerError,
            other => Self::OtherHttp { status: other },
        }
    }

    /// The HTTP status behind this failure, when there was one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::ServerError => Some(500),
            Self::OtherHttp { status } => Some(*status),
            Self::NetworkUnreachable | Self::ApplicationError { .. } => None,
        }
    }

    /// Short machine-friendly label, used in logs.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::ServerError => "server_error",
            Self::OtherHttp { .. } => "other_http",
            Self::NetworkUnreachable => "network_unreachable",
            Self::ApplicationError { .. } => "application_error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OtherHttp { status } => write!(f, "http {status}"),
            other => f.write_str(other.label()),
        }
    }
}

/// A classified gateway failure with its human-readable detail.
///
/// The detail is what the notification surface shows to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{detail}")]
pub struct Failure {
    kind: FailureKind,
    detail: String,
}

impl Failure {
    /// Build a failure. A blank detail falls back to the kind label so the
    /// detail is never empty.
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if detail.trim().is_empty() {
            kind.to_string()
        } else {
            detail
        };
        Self { kind, detail }
    }

    pub const fn kind(&self) -> &FailureKind {
        &self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub const fn is_auth(&self) -> bool {
        matches!(self.kind, FailureKind::Unauthorized | FailureKind::Forbidden)
    }
}
