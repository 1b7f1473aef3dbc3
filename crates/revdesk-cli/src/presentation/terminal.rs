//! Terminal renderer: toasts become lines on stderr.
//!
//! A terminal cannot take lines back, so only `render` draws anything; the
//! exit transition and removal are tracked by the surface alone.

use console::{Term, style};
use revdesk_core::{NotificationId, Severity};
use revdesk_notify::{ToastRenderer, ToastView};
use tracing::{debug, trace};

/// Renders toasts on stderr, keeping stdout for payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer;

impl TerminalRenderer {
    pub const fn stderr() -> Self {
        Self
    }
}

/// One toast as a terminal line: time, severity marker, message.
pub fn format_toast(toast: &ToastView) -> String {
    let marker = match toast.severity {
        Severity::Success => style("✓").green(),
        Severity::Error => style("✗").red(),
        Severity::Warning => style("!").yellow(),
        Severity::Info => style("i").cyan(),
    };
    format!(
        "{} {} {}",
        style(toast.created_at.format("%H:%M:%S")).dim().for_stderr(),
        marker.bold().for_stderr(),
        toast.message
    )
}

impl ToastRenderer for TerminalRenderer {
    fn mount(&self) {
        trace!("Toast stack opened");
    }

    fn render(&self, toast: &ToastView) {
        if let Err(err) = Term::stderr().write_line(&format_toast(toast)) {
            debug!(id = %toast.id, error = %err, "Failed to draw toast");
        }
    }

    fn begin_exit(&self, id: NotificationId) {
        trace!(%id, "Toast exiting");
    }

    fn remove(&self, _id: NotificationId) {}

    fn unmount(&self) {
        trace!("Toast stack closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revdesk_core::NotificationState;
    use std::time::Duration;

    fn toast(severity: Severity, message: &str) -> ToastView {
        ToastView {
            id: NotificationId::new(1),
            message: message.to_string(),
            severity,
            created_at: "2026-01-05T09:30:00Z".parse().unwrap(),
            lifetime: Some(Duration::from_secs(3)),
            remaining: Some(Duration::from_secs(3)),
            state: NotificationState::Live,
        }
    }

    #[test]
    fn test_format_toast_contains_time_and_message() {
        console::set_colors_enabled_stderr(false);
        let line = format_toast(&toast(Severity::Error, "db down"));
        assert_eq!(line, "09:30:00 ✗ db down");
    }

    #[test]
    fn test_markers_per_severity() {
        console::set_colors_enabled_stderr(false);
        assert!(format_toast(&toast(Severity::Success, "ok")).contains("✓ ok"));
        assert!(format_toast(&toast(Severity::Warning, "hm")).contains("! hm"));
        assert!(format_toast(&toast(Severity::Info, "fyi")).contains("i fyi"));
    }
}
