//! Terminal console for the webhook code-review backend.
//!
//! Parses commands, composes the request gateway with a notification surface
//! that draws on stderr, and prints backend payloads as JSON on stdout.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;

// Used by the binary's entry point only
use anyhow as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod config_commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod project_commands;
pub mod review_commands;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::Commands;
pub use config_commands::ConfigCommand;
pub use error::CliError;
pub use parser::{Cli, Lang};
pub use project_commands::ProjectsCommand;
pub use review_commands::ReviewsCommand;
