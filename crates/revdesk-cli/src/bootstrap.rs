//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the gateway and the notification
//! surface are wired together for the CLI adapter. The surface is handed to
//! the gateway as its `NotifierPort`, so failures reach the terminal without
//! the handlers doing anything.

use std::sync::Arc;
use std::time::Duration;

use revdesk_core::{ApiSettings, validate_settings};
use revdesk_gateway::{Gateway, GatewayConfig, HttpBackend, ReqwestBackend};
use revdesk_notify::{NotificationSurface, SurfaceConfig, ToastRenderer};
use tracing::debug;

use crate::error::CliError;
use crate::parser::Lang;
use crate::presentation::TerminalRenderer;

/// Extra time granted to exit transitions before the process ends.
const SETTLE_MARGIN: Duration = Duration::from_millis(250);

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: ApiSettings,
    pub lang: Lang,
}

impl CliConfig {
    /// Resolve settings from the process environment and flags.
    pub fn from_env(origin: Option<&str>, lang: Lang) -> Result<Self, CliError> {
        Self::resolve(origin, lang, |key| std::env::var(key).ok())
    }

    /// Resolve settings: defaults, then `lookup`, then the origin flag.
    pub fn resolve<F>(origin: Option<&str>, lang: Lang, lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = ApiSettings::default();
        settings.apply_env(lookup)?;
        if let Some(origin) = origin {
            settings.origin = origin.to_string();
        }
        validate_settings(&settings)?;

        debug!(
            origin = %settings.origin,
            base_path = %settings.base_path,
            timeout_ms = settings.timeout_ms,
            "Resolved API settings"
        );
        Ok(Self { settings, lang })
    }

    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::from_settings(&self.settings).with_messages(self.lang.failure_messages())
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext<B: HttpBackend = ReqwestBackend> {
    pub gateway: Gateway<B>,
    pub surface: NotificationSurface,
    pub lang: Lang,
}

impl<B: HttpBackend> CliContext<B> {
    pub const fn gateway(&self) -> &Gateway<B> {
        &self.gateway
    }

    /// Finish every notification and wait, bounded, for the surface to go
    /// idle.
    pub async fn settle(&self) {
        let dismissed = self.surface.dismiss_all();
        let bound = self.surface.config().exit_delay() + SETTLE_MARGIN;
        if tokio::time::timeout(bound, self.surface.wait_idle())
            .await
            .is_err()
        {
            debug!(dismissed, "Notification surface did not settle in time");
        }
    }
}

/// Compose the production context: reqwest backend, terminal toasts.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    bootstrap_with(config, ReqwestBackend::new()?, TerminalRenderer::stderr())
}

/// Compose a context around a specific backend and renderer.
pub fn bootstrap_with<B: HttpBackend>(
    config: &CliConfig,
    backend: B,
    renderer: impl ToastRenderer + 'static,
) -> Result<CliContext<B>, CliError> {
    let surface = NotificationSurface::new(renderer, SurfaceConfig::new())?;
    let gateway = Gateway::with_backend(
        config.gateway_config(),
        backend,
        Arc::new(surface.clone()),
    )?;

    Ok(CliContext {
        gateway,
        surface,
        lang: config.lang,
    })
}
