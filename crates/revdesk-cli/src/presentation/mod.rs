//! Shared CLI presentation utilities.
//!
//! Format-only: payloads come straight from the backend and are printed as
//! JSON; notifications are drawn by the terminal renderer.

pub mod notices;
pub mod output;
pub mod terminal;

pub use notices::Notice;
pub use output::{format_json, print_json};
pub use terminal::{TerminalRenderer, format_toast};
