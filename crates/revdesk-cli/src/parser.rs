//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::{Parser, ValueEnum};
use revdesk_gateway::FailureMessages;

use crate::commands::Commands;

/// Command-line interface for the review backend console.
#[derive(Parser)]
#[command(name = "revdesk")]
#[command(about = "Operate the webhook code-review backend from the terminal")]
#[command(version)]
pub struct Cli {
    /// Backend origin, e.g. http://127.0.0.1:8000 (overrides REVDESK_API_ORIGIN)
    #[arg(long, global = true)]
    pub origin: Option<String>,

    /// Language of failure and notice text
    #[arg(long, value_enum, default_value_t = Lang::En, env = "REVDESK_LANG", global = true)]
    pub lang: Lang,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Language of user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    /// Default failure text in this language.
    pub fn failure_messages(self) -> FailureMessages {
        match self {
            Self::En => FailureMessages::english(),
            Self::Zh => FailureMessages::chinese(),
        }
    }
}
