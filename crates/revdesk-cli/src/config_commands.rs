//! Configuration management subcommands.

use clap::Subcommand;

/// Configuration management commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Get,
    /// Show configuration grouped by section
    Summary,
    /// Replace the configuration
    Set {
        /// Configuration as JSON
        payload: String,
    },
    /// Update several configuration sections at once
    Batch {
        /// Batch update as JSON
        payload: String,
    },
}
