//! Project management endpoints.
//!
//! Projects are addressed by their GitLab project id.

use revdesk_core::{Endpoint, HttpMethod, Outcome, QueryParams};
use serde_json::Value;

use super::Gateway;
use crate::http::HttpBackend;

impl<B: HttpBackend> Gateway<B> {
    /// List projects, optionally filtered (`review_enabled=true|false`).
    pub async fn projects(&self, query: QueryParams) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Get, &Endpoint::Projects)
            .with_query(query);
        self.execute(descriptor).await
    }

    pub async fn project_detail(&self, id: &str) -> Outcome {
        let endpoint = Endpoint::ProjectDetail(id.to_string());
        self.execute(self.descriptor(HttpMethod::Get, &endpoint))
            .await
    }

    /// Turn automatic review on for a project.
    pub async fn enable_project(&self, id: &str) -> Outcome {
        let endpoint = Endpoint::ProjectEnable(id.to_string());
        self.execute(self.descriptor(HttpMethod::Post, &endpoint))
            .await
    }

    /// Turn automatic review off for a project.
    pub async fn disable_project(&self, id: &str) -> Outcome {
        let endpoint = Endpoint::ProjectDisable(id.to_string());
        self.execute(self.descriptor(HttpMethod::Post, &endpoint))
            .await
    }

    /// Partially update a project's settings.
    pub async fn update_project(&self, id: &str, body: Value) -> Outcome {
        let endpoint = Endpoint::ProjectUpdate(id.to_string());
        let descriptor = self
            .descriptor(HttpMethod::Patch, &endpoint)
            .with_body(body);
        self.execute(descriptor).await
    }

    pub async fn project_stats(&self) -> Outcome {
        self.execute(self.descriptor(HttpMethod::Get, &Endpoint::ProjectStats))
            .await
    }

    pub async fn project_webhook_logs(&self, id: &str, query: QueryParams) -> Outcome {
        let endpoint = Endpoint::ProjectWebhookLogs(id.to_string());
        let descriptor = self
            .descriptor(HttpMethod::Get, &endpoint)
            .with_query(query);
        self.execute(descriptor).await
    }

    pub async fn project_review_history(&self, id: &str, query: QueryParams) -> Outcome {
        let endpoint = Endpoint::ProjectReviewHistory(id.to_string());
        let descriptor = self
            .descriptor(HttpMethod::Get, &endpoint)
            .with_query(query);
        self.execute(descriptor).await
    }
}
