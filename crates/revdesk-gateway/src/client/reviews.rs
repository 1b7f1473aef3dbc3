//! Review records and webhook logs.

use revdesk_core::{Endpoint, HttpMethod, Outcome, QueryParams};

use super::Gateway;
use crate::http::HttpBackend;

impl<B: HttpBackend> Gateway<B> {
    /// Paginated review records (`page`, `page_size`, `search`...).
    pub async fn reviews(&self, query: QueryParams) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Get, &Endpoint::Reviews)
            .with_query(query);
        self.execute(descriptor).await
    }

    pub async fn review_detail(&self, id: &str) -> Outcome {
        let endpoint = Endpoint::ReviewDetail(id.to_string());
        self.execute(self.descriptor(HttpMethod::Get, &endpoint))
            .await
    }

    /// Webhook processing logs.
    pub async fn logs(&self, query: QueryParams) -> Outcome {
        let descriptor = self
            .descriptor(HttpMethod::Get, &Endpoint::Logs)
            .with_query(query);
        self.execute(descriptor).await
    }
}
