//! Dashboard statistics, system information and the webhook self-test.

use revdesk_core::{Endpoint, HttpMethod, Outcome};
use serde_json::Value;

use super::Gateway;
use crate::http::HttpBackend;

impl<B: HttpBackend> Gateway<B> {
    pub async fn statistics(&self) -> Outcome {
        self.execute(self.descriptor(HttpMethod::Get, &Endpoint::Statistics))
            .await
    }

    pub async fn system_info(&self) -> Outcome {
        self.execute(self.descriptor(HttpMethod::Get, &Endpoint::SystemInfo))
            .await
    }

    /// Send a synthetic webhook payload through the backend pipeline.
    ///
    /// The backend runs a full review before answering, so this call uses
    /// the slow timeout.
    pub async fn test_webhook(&self, body: Value) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Post, &Endpoint::WebhookTest)
            .with_body(body);
        self.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::gateway;
    use super::*;
    use crate::http::testing::{CannedReply, FakeBackend};
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_statistics_returns_payload() {
        let backend = FakeBackend::new().with_route(
            "/statistics",
            CannedReply::json(200, json!({"total_reviews": 42})),
        );
        let gateway = gateway(backend);

        let payload = gateway.statistics().await.unwrap();
        assert_eq!(payload, json!({"total_reviews": 42}));
    }

    #[tokio::test]
    async fn test_webhook_test_uses_slow_timeout() {
        let backend = FakeBackend::new().with_default(CannedReply::json(200, json!({})));
        let gateway = gateway(backend);

        gateway
            .test_webhook(json!({"object_kind": "merge_request"}))
            .await
            .unwrap();

        let request = gateway.backend().last_request().unwrap();
        assert_eq!(request.url.path(), "/api/test/webhook");
        assert_eq!(request.timeout, Duration::from_secs(90));
    }

    #[tokio::test]
    async fn test_system_info_uses_default_timeout() {
        let backend = FakeBackend::new().with_default(CannedReply::json(200, json!({})));
        let gateway = gateway(backend);

        gateway.system_info().await.unwrap();

        let request = gateway.backend().last_request().unwrap();
        assert_eq!(request.timeout, Duration::from_secs(30));
    }
}
