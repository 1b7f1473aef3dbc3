//! Notification surface for revdesk.
//!
//! Owns the ordered stack of transient messages shown to the operator:
//! stacking, per-notification expiry, the exit transition and the lazily
//! mounted container. Drawing is delegated to a [`ToastRenderer`].
//!
//! The surface implements `revdesk_core::NotifierPort`, which is how the
//! request gateway reports failures without depending on this crate.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
mod renderer;
mod surface;

// ============================================================================
// Public API
// ============================================================================

pub use config::{DEFAULT_EXIT_DELAY, DEFAULT_LIFETIME, SurfaceConfig};
pub use error::SurfaceError;
pub use renderer::{NoopRenderer, ToastRenderer, ToastView};
pub use surface::{NotificationHandle, NotificationSurface};

#[cfg(any(test, feature = "test-utils"))]
pub use renderer::testing;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
