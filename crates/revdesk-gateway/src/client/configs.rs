//! Backend configuration endpoints.

use revdesk_core::{Endpoint, HttpMethod, Outcome};
use serde_json::Value;

use super::Gateway;
use crate::http::HttpBackend;

impl<B: HttpBackend> Gateway<B> {
    pub async fn config(&self) -> Outcome {
        self.execute(self.descriptor(HttpMethod::Get, &Endpoint::Config))
            .await
    }

    /// Replace the backend configuration.
    pub async fn update_config(&self, body: Value) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Post, &Endpoint::Config)
            .with_body(body);
        self.execute(descriptor).await
    }

    /// Configuration grouped by section.
    pub async fn config_summary(&self) -> Outcome {
        self.execute(self.descriptor(HttpMethod::Get, &Endpoint::ConfigSummary))
            .await
    }

    /// Update several configuration sections in one call.
    pub async fn batch_update_configs(&self, body: Value) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Post, &Endpoint::ConfigBatchUpdate)
            .with_body(body);
        self.execute(descriptor).await
    }
}
