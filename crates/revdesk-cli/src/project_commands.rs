//! Project management subcommands.
//!
//! Projects are addressed by their GitLab project ID.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectsCommand {
    /// List projects
    List {
        /// Only projects with review enabled (true) or disabled (false)
        #[arg(long)]
        enabled: Option<bool>,
    },
    /// Show one project
    Show {
        /// GitLab project ID
        id: String,
    },
    /// Enable automatic review for a project
    Enable {
        /// GitLab project ID
        id: String,
    },
    /// Disable automatic review for a project
    Disable {
        /// GitLab project ID
        id: String,
    },
    /// Update project settings
    Update {
        /// GitLab project ID
        id: String,
        /// Fields to change as JSON
        payload: String,
    },
    /// Show aggregate project statistics
    Stats,
    /// Show webhook events received for a project
    Logs {
        /// GitLab project ID
        id: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show review history of a project
    History {
        /// GitLab project ID
        id: String,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
}
