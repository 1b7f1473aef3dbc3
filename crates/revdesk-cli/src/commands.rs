//! Main commands enum.
//!
//! One command per backend area; areas with several operations get their own
//! subcommand enum.

use clap::Subcommand;

use crate::config_commands::ConfigCommand;
use crate::project_commands::ProjectsCommand;
use crate::review_commands::ReviewsCommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard statistics
    Stats,

    /// Show backend system information
    SystemInfo,

    /// Browse code review records
    Reviews {
        #[command(subcommand)]
        command: ReviewsCommand,
    },

    /// Show webhook processing logs
    Logs {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Entries per page
        #[arg(long)]
        page_size: Option<u32>,
    },

    /// Read or change the backend configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Manage GitLab projects known to the backend
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },

    /// Send a test webhook payload through the review pipeline
    TestWebhook {
        /// Webhook payload as JSON
        payload: String,
    },
}
