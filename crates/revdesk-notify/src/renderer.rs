//! Renderer port: how the toast stack becomes visible.
//!
//! The surface owns the ordered sequence and the lifecycle; a renderer only
//! draws what it is told. Calls arrive in mutation order, while the surface
//! holds its lock, so a renderer must not call back into the surface.

use std::time::Duration;

use chrono::{DateTime, Utc};
use revdesk_core::{NotificationId, NotificationState, Severity};

/// Read-only view of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// `None` for notifications that persist until dismissed.
    pub lifetime: Option<Duration>,
    /// Time left before the exit transition starts. `None` when persistent,
    /// zero once exiting.
    pub remaining: Option<Duration>,
    pub state: NotificationState,
}

/// Trait for drawing the notification stack.
///
/// # Implementations
///
/// - `NoopRenderer` - Headless surfaces
/// - `testing::RecordingRenderer` - Captures every call for assertions
/// - The CLI's terminal renderer
pub trait ToastRenderer: Send + Sync {
    /// Create the container. Called before the first toast of a stack.
    fn mount(&self);

    /// Draw a newly appended toast at the end of the stack.
    fn render(&self, toast: &ToastView);

    /// Start the exit transition of a toast.
    fn begin_exit(&self, id: NotificationId);

    /// Remove a toast; the others keep their relative order.
    fn remove(&self, id: NotificationId);

    /// Tear the container down. Called when the last toast is removed.
    fn unmount(&self);
}

/// A renderer that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl ToastRenderer for NoopRenderer {
    fn mount(&self) {}
    fn render(&self, _toast: &ToastView) {}
    fn begin_exit(&self, _id: NotificationId) {}
    fn remove(&self, _id: NotificationId) {}
    fn unmount(&self) {}
}

// ============================================================================
// Recording Renderer for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// One call received by the recording renderer.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RenderEvent {
        Mount,
        Render(ToastView),
        BeginExit(NotificationId),
        Remove(NotificationId),
        Unmount,
    }

    /// Renderer that records every call. Clones share the same log.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingRenderer {
        events: Arc<Mutex<Vec<RenderEvent>>>,
    }

    impl RecordingRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<RenderEvent> {
            self.events.lock().unwrap().clone()
        }

        /// Messages of every toast rendered so far, in render order.
        pub fn rendered_messages(&self) -> Vec<String> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .filter_map(|event| match event {
                    RenderEvent::Render(view) => Some(view.message.clone()),
                    _ => None,
                })
                .collect()
        }

        /// Number of recorded calls matching `predicate`.
        pub fn count(&self, predicate: impl Fn(&RenderEvent) -> bool) -> usize {
            self.events.lock().unwrap().iter().filter(|e| predicate(e)).count()
        }

        pub fn clear(&self) {
            self.events.lock().unwrap().clear();
        }

        fn record(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl ToastRenderer for RecordingRenderer {
        fn mount(&self) {
            self.record(RenderEvent::Mount);
        }

        fn render(&self, toast: &ToastView) {
            self.record(RenderEvent::Render(toast.clone()));
        }

        fn begin_exit(&self, id: NotificationId) {
            self.record(RenderEvent::BeginExit(id));
        }

        fn remove(&self, id: NotificationId) {
            self.record(RenderEvent::Remove(id));
        }

        fn unmount(&self) {
            self.record(RenderEvent::Unmount);
        }
    }
}
