//! Surface timing configuration.

use std::time::Duration;

/// Default lifetime of a notification.
pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(3000);

/// Default length of the exit transition.
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(300);

/// Timing configuration for a [`NotificationSurface`].
///
/// [`NotificationSurface`]: crate::NotificationSurface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceConfig {
    /// Lifetime used by `show_default` and the notifier port
    pub(crate) default_lifetime: Duration,
    /// Time between the start of the exit transition and removal
    pub(crate) exit_delay: Duration,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            default_lifetime: DEFAULT_LIFETIME,
            exit_delay: DEFAULT_EXIT_DELAY,
        }
    }
}

impl SurfaceConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default lifetime. `Duration::ZERO` makes default
    /// notifications persistent.
    #[must_use]
    pub const fn with_default_lifetime(mut self, lifetime: Duration) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    #[must_use]
    pub const fn with_exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = delay;
        self
    }

    pub const fn default_lifetime(&self) -> Duration {
        self.default_lifetime
    }

    pub const fn exit_delay(&self) -> Duration {
        self.exit_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SurfaceConfig::new();
        assert_eq!(config.default_lifetime(), Duration::from_secs(3));
        assert_eq!(config.exit_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_builder() {
        let config = SurfaceConfig::new()
            .with_default_lifetime(Duration::ZERO)
            .with_exit_delay(Duration::from_millis(50));
        assert_eq!(config.default_lifetime(), Duration::ZERO);
        assert_eq!(config.exit_delay(), Duration::from_millis(50));
    }
}
