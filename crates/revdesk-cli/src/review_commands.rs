//! Review record subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// List review records
    List {
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Records per page
        #[arg(long)]
        page_size: Option<u32>,
        /// Free-text search
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one review record
    Show {
        /// Review ID
        id: String,
    },
}
