//! The notification surface: an ordered stack of transient messages.
//!
//! Each notification moves `Live -> Exiting -> Destroyed`. A live
//! notification with a bounded lifetime owns an expiry task; dismissing it
//! cancels that task and starts the exit transition, after which the
//! notification is removed. The container is mounted on the first `show`
//! and torn down when the last notification is removed.
//!
//! All mutations go through one `std::sync::Mutex`. The lock is never held
//! across an `.await`; timer tasks only take it once they wake up.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use revdesk_core::{NotificationId, NotificationState, NotifierPort, Severity};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::config::SurfaceConfig;
use crate::error::SurfaceError;
use crate::renderer::{NoopRenderer, ToastRenderer, ToastView};

/// Handle to a shown notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle(NotificationId);

impl NotificationHandle {
    pub const fn id(self) -> NotificationId {
        self.0
    }
}

// ============================================================================
// Internal State
// ============================================================================

struct Slot {
    id: NotificationId,
    message: String,
    severity: Severity,
    created_at: DateTime<Utc>,
    lifetime: Option<Duration>,
    expires_at: Option<Instant>,
    state: NotificationState,
    /// Cancels the expiry task. Taken when the exit transition starts.
    expiry: Option<CancellationToken>,
}

impl Slot {
    fn view(&self, now: Instant) -> ToastView {
        let remaining = match self.state {
            NotificationState::Exiting => Some(Duration::ZERO),
            NotificationState::Live => self
                .expires_at
                .map(|deadline| deadline.saturating_duration_since(now)),
        };
        ToastView {
            id: self.id,
            message: self.message.clone(),
            severity: self.severity,
            created_at: self.created_at,
            lifetime: self.lifetime,
            remaining,
            state: self.state,
        }
    }
}

#[derive(Default)]
struct Stack {
    /// Display order: oldest first.
    slots: Vec<Slot>,
    mounted: bool,
    next_id: u64,
}

impl Stack {
    fn find(&self, id: NotificationId) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.id == id)
    }
}

struct Shared {
    stack: Mutex<Stack>,
    renderer: Box<dyn ToastRenderer>,
    config: SurfaceConfig,
    runtime: Handle,
    /// `true` while no container is mounted.
    idle: watch::Sender<bool>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Stack> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn show(self: &Arc<Self>, message: String, severity: Severity, lifetime: Duration) -> NotificationId {
        let mut stack = self.lock();

        if !stack.mounted {
            self.renderer.mount();
            stack.mounted = true;
            self.idle.send_replace(false);
            trace!("Notification container mounted");
        }

        stack.next_id += 1;
        let id = NotificationId::new(stack.next_id);
        let now = Instant::now();

        let deadline = if lifetime.is_zero() {
            None
        } else {
            now.checked_add(lifetime)
        };
        let expiry = deadline.map(|deadline| {
            let token = CancellationToken::new();
            self.spawn_expiry(id, deadline, token.clone());
            token
        });

        let slot = Slot {
            id,
            message,
            severity,
            created_at: Utc::now(),
            lifetime: deadline.map(|_| lifetime),
            expires_at: deadline,
            state: NotificationState::Live,
            expiry,
        };
        self.renderer.render(&slot.view(now));
        stack.slots.push(slot);

        debug!(
            %id,
            %severity,
            lifetime_ms = lifetime.as_millis(),
            stacked = stack.slots.len(),
            "Notification shown"
        );
        id
    }

    /// Move a live notification to `Exiting`. Returns `false` when it is
    /// unknown or already exiting.
    fn begin_exit(self: &Arc<Self>, id: NotificationId) -> bool {
        let mut stack = self.lock();
        let Some(slot) = stack.slots.iter_mut().find(|slot| slot.id == id) else {
            return false;
        };
        if slot.state == NotificationState::Exiting {
            return false;
        }

        slot.state = NotificationState::Exiting;
        slot.expires_at = None;
        if let Some(token) = slot.expiry.take() {
            token.cancel();
        }

        self.renderer.begin_exit(id);
        self.spawn_removal(id);
        debug!(%id, "Notification exiting");
        true
    }

    fn remove(&self, id: NotificationId) {
        let mut stack = self.lock();
        let Some(position) = stack.slots.iter().position(|slot| slot.id == id) else {
            return;
        };

        stack.slots.remove(position);
        self.renderer.remove(id);
        debug!(%id, stacked = stack.slots.len(), "Notification removed");

        if stack.slots.is_empty() && stack.mounted {
            self.renderer.unmount();
            stack.mounted = false;
            self.idle.send_replace(true);
            trace!("Notification container unmounted");
        }
    }

    fn spawn_expiry(self: &Arc<Self>, id: NotificationId, deadline: Instant, token: CancellationToken) {
        let shared = Arc::downgrade(self);
        self.runtime.spawn(async move {
            tokio::select! {
                () = token.cancelled() => {}
                () = tokio::time::sleep_until(deadline) => {
                    if let Some(shared) = shared.upgrade() {
                        trace!(%id, "Notification expired");
                        shared.begin_exit(id);
                    }
                }
            }
        });
    }

    fn spawn_removal(self: &Arc<Self>, id: NotificationId) {
        let shared = Arc::downgrade(self);
        let delay = self.config.exit_delay;
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(shared) = shared.upgrade() {
                shared.remove(id);
            }
        });
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let stack = self
            .stack
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);
        for slot in &mut stack.slots {
            if let Some(token) = slot.expiry.take() {
                token.cancel();
            }
        }
    }
}

// ============================================================================
// Notification Surface
// ============================================================================

/// Stacked, auto-expiring notifications.
///
/// Cheap to clone; clones share the same stack. Timers run on the tokio
/// runtime that was current when the surface was created, so every method
/// may be called from any thread.
#[derive(Clone)]
pub struct NotificationSurface {
    shared: Arc<Shared>,
}

impl NotificationSurface {
    /// Create a surface drawing through `renderer`.
    ///
    /// Fails with [`SurfaceError::NoRuntime`] outside a tokio runtime.
    pub fn new(
        renderer: impl ToastRenderer + 'static,
        config: SurfaceConfig,
    ) -> Result<Self, SurfaceError> {
        let runtime = Handle::try_current().map_err(|_| SurfaceError::NoRuntime)?;
        let (idle, _) = watch::channel(true);

        Ok(Self {
            shared: Arc::new(Shared {
                stack: Mutex::new(Stack::default()),
                renderer: Box::new(renderer),
                config,
                runtime,
                idle,
            }),
        })
    }

    /// A surface that tracks notifications without drawing them.
    pub fn headless(config: SurfaceConfig) -> Result<Self, SurfaceError> {
        Self::new(NoopRenderer, config)
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.shared.config
    }

    /// Append a notification to the stack.
    ///
    /// `Duration::ZERO` keeps it until it is dismissed.
    pub fn show(
        &self,
        message: impl Into<String>,
        severity: Severity,
        lifetime: Duration,
    ) -> NotificationHandle {
        NotificationHandle(self.shared.show(message.into(), severity, lifetime))
    }

    /// Append a notification with the configured default lifetime.
    pub fn show_default(&self, message: impl Into<String>, severity: Severity) -> NotificationHandle {
        self.show(message, severity, self.shared.config.default_lifetime)
    }

    pub fn success(&self, message: impl Into<String>) -> NotificationHandle {
        self.show_default(message, Severity::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> NotificationHandle {
        self.show_default(message, Severity::Error)
    }

    pub fn warning(&self, message: impl Into<String>) -> NotificationHandle {
        self.show_default(message, Severity::Warning)
    }

    pub fn info(&self, message: impl Into<String>) -> NotificationHandle {
        self.show_default(message, Severity::Info)
    }

    /// Start the exit transition of a notification.
    ///
    /// Returns `false`, and does nothing, when the notification is already
    /// exiting or gone.
    pub fn dismiss(&self, handle: NotificationHandle) -> bool {
        self.shared.begin_exit(handle.0)
    }

    /// Dismiss every live notification. Returns how many started exiting.
    pub fn dismiss_all(&self) -> usize {
        let live: Vec<NotificationId> = self
            .shared
            .lock()
            .slots
            .iter()
            .filter(|slot| slot.state == NotificationState::Live)
            .map(|slot| slot.id)
            .collect();

        live.into_iter()
            .filter(|id| self.shared.begin_exit(*id))
            .count()
    }

    /// Every notification in display order.
    pub fn snapshot(&self) -> Vec<ToastView> {
        let now = Instant::now();
        self.shared
            .lock()
            .slots
            .iter()
            .map(|slot| slot.view(now))
            .collect()
    }

    /// Lifecycle state, or `None` once destroyed.
    pub fn state(&self, handle: NotificationHandle) -> Option<NotificationState> {
        self.shared.lock().find(handle.0).map(|slot| slot.state)
    }

    /// Time left before the notification starts exiting.
    ///
    /// `None` for persistent or destroyed notifications.
    pub fn remaining(&self, handle: NotificationHandle) -> Option<Duration> {
        let now = Instant::now();
        self.shared
            .lock()
            .find(handle.0)
            .and_then(|slot| slot.view(now).remaining)
    }

    /// Number of notifications in the `Live` state.
    pub fn live_count(&self) -> usize {
        self.shared
            .lock()
            .slots
            .iter()
            .filter(|slot| slot.state == NotificationState::Live)
            .count()
    }

    /// Number of notifications in the stack, exiting ones included.
    pub fn len(&self) -> usize {
        self.shared.lock().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.lock().slots.is_empty()
    }

    pub fn has_container(&self) -> bool {
        self.shared.lock().mounted
    }

    /// Resolve once no container is mounted.
    pub async fn wait_idle(&self) {
        let mut idle = self.shared.idle.subscribe();
        if idle.wait_for(|idle| *idle).await.is_err() {
            trace!("Idle channel closed");
        }
    }
}

impl std::fmt::Debug for NotificationSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stack = self.shared.lock();
        f.debug_struct("NotificationSurface")
            .field("config", &self.shared.config)
            .field("stacked", &stack.slots.len())
            .field("mounted", &stack.mounted)
            .finish_non_exhaustive()
    }
}

impl NotifierPort for NotificationSurface {
    fn notify(&self, severity: Severity, message: &str) {
        self.show_default(message, severity);
    }
}
