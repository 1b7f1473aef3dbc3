//! Notifier port for surfacing messages to the operator.
//!
//! The gateway pushes failure messages through this trait without knowing
//! how (or whether) they are displayed. The notification surface is the
//! production implementation.

use std::sync::Arc;

use crate::domain::Severity;

/// Trait for pushing user-visible messages.
///
/// # Implementations
///
/// - `NoopNotifier` - For tests and headless contexts
/// - `revdesk_notify::NotificationSurface` - Stacked, auto-expiring toasts
#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    /// Push one message.
    ///
    /// Must not block and must be safe to call whether or not any other
    /// message is currently displayed.
    fn notify(&self, severity: Severity, message: &str);
}

impl<T: NotifierPort + ?Sized> NotifierPort for Arc<T> {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message);
    }
}

/// A notifier that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl NoopNotifier {
    pub const fn new() -> Self {
        Self
    }
}

impl NotifierPort for NoopNotifier {
    fn notify(&self, _severity: Severity, _message: &str) {}
}
