//! Errors raised by the notification surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface schedules its timers on a tokio runtime and was created
    /// outside of one.
    #[error("Notification surface must be created inside a tokio runtime")]
    NoRuntime,
}
