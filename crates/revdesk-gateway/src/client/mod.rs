//! The request gateway: the single chokepoint for backend calls.
//!
//! Every call goes through [`Gateway::execute`], which attaches the default
//! configuration, hands the request to the HTTP backend, classifies what came
//! back and, for failures, pushes an error notification before returning the
//! outcome to the caller.

mod configs;
mod projects;
mod reviews;
mod system;

use std::sync::Arc;

use revdesk_core::{Endpoint, HttpMethod, NotifierPort, Outcome, RequestDescriptor, Severity};
use tracing::{debug, warn};
use url::Url;

use crate::classify::{classify_response, classify_transport};
use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::http::{HttpBackend, PreparedRequest, ReqwestBackend};
use crate::url::{build_base_url, build_request_url};

// ============================================================================
// Type Aliases
// ============================================================================

/// Gateway using the reqwest HTTP backend.
pub type DefaultGateway = Gateway<ReqwestBackend>;

// ============================================================================
// Gateway
// ============================================================================

/// Request gateway, generic over its HTTP backend.
///
/// The gateway holds no per-call state: the configuration is read-only after
/// construction, so any number of `execute` calls may be in flight at once.
pub struct Gateway<B: HttpBackend> {
    backend: B,
    notifier: Arc<dyn NotifierPort>,
    config: GatewayConfig,
    base_url: Url,
}

impl DefaultGateway {
    /// Create a gateway backed by reqwest.
    pub fn new(config: GatewayConfig, notifier: Arc<dyn NotifierPort>) -> Result<Self, GatewayError> {
        Self::with_backend(config, ReqwestBackend::new()?, notifier)
    }
}

impl<B: HttpBackend> Gateway<B> {
    /// Create a gateway with a custom backend.
    pub fn with_backend(
        config: GatewayConfig,
        backend: B,
        notifier: Arc<dyn NotifierPort>,
    ) -> Result<Self, GatewayError> {
        let base_url = build_base_url(&config.origin, &config.base_path)?;
        Ok(Self {
            backend,
            notifier,
            config,
            base_url,
        })
    }

    pub const fn gateway_config(&self) -> &GatewayConfig {
        &self.config
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Issue one call and classify its outcome.
    ///
    /// Never retries. Every failure is pushed to the notifier exactly once,
    /// as an error, before it is returned.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Outcome {
        let request = self.prepare(descriptor);
        let method = request.method;
        let url = request.url.to_string();

        debug!(%method, %url, timeout_ms = request.timeout.as_millis(), "Dispatching request");

        let outcome = match self.backend.send(request).await {
            Ok(response) => {
                debug!(%method, %url, status = response.status, "Response received");
                classify_response(&response, &self.config.messages)
            }
            Err(err) => {
                debug!(%method, %url, error = %err, "No response from backend");
                Err(classify_transport(&err, &self.config.messages))
            }
        };

        if let Err(ref failure) = outcome {
            warn!(
                %method,
                %url,
                kind = failure.kind().label(),
                status = failure.kind().status(),
                detail = failure.detail(),
                "Request failed"
            );
            self.notifier.notify(Severity::Error, failure.detail());
        }

        outcome
    }

    /// Resolve a descriptor against the default configuration.
    fn prepare(&self, descriptor: RequestDescriptor) -> PreparedRequest {
        PreparedRequest {
            method: descriptor.method(),
            url: build_request_url(&self.base_url, descriptor.path(), descriptor.query()),
            headers: self.config.headers.clone(),
            timeout: descriptor.timeout().unwrap_or(self.config.timeout),
            body: descriptor.body().cloned(),
        }
    }

    /// Start a descriptor for a registry endpoint, applying the slow timeout
    /// where the endpoint needs it.
    pub(crate) fn descriptor(&self, method: HttpMethod, endpoint: &Endpoint) -> RequestDescriptor {
        let descriptor = RequestDescriptor::new(method, endpoint.path());
        if endpoint.is_slow() {
            descriptor.with_timeout(self.config.slow_timeout)
        } else {
            descriptor
        }
    }
}
