//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and maps
//! gateway failures and setup problems to exit codes.

use revdesk_core::{Failure, FailureKind, SettingsError};
use revdesk_gateway::GatewayError;
use revdesk_notify::SurfaceError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A backend call failed. Already shown to the operator as a toast.
    #[error("{0}")]
    Request(#[from] Failure),

    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (stdout closed, ...).
    #[error("IO error: {0}")]
    Io(String),

    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Request(failure) => match failure.kind() {
                FailureKind::Unauthorized | FailureKind::Forbidden => 77, // EX_NOPERM
                FailureKind::NetworkUnreachable => 69,                     // EX_UNAVAILABLE
                _ => 1,
            },
            Self::Arguments(_) => 2,
            Self::Config(_) => 78, // EX_CONFIG
            Self::Io(_) => 74,     // EX_IOERR
            Self::Internal(_) => 1,
        }
    }

    /// Whether the operator has already seen this error as a notification.
    pub const fn is_notified(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<GatewayError> for CliError {
    fn from(err: GatewayError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<SurfaceError> for CliError {
    fn from(err: SurfaceError) -> Self {
        Self::Internal(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
