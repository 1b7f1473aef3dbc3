//! HTTP backend abstraction for the gateway.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest. Backends only move bytes: they report the status and body
//! of whatever came back and never judge success or failure.

use std::time::Duration;

use async_trait::async_trait;
use revdesk_core::HttpMethod;
use serde_json::Value;
use url::Url;

use crate::error::{GatewayError, TransportError, TransportResult};

// ============================================================================
// Wire Types
// ============================================================================

/// A fully resolved request, ready for the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timeout: Duration,
}

/// Whatever HTTP response came back, regardless of status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Build a response with a JSON body.
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can deliver a prepared request.
///
/// `Ok` means an HTTP response arrived, whatever its status.
/// `Err` means no response arrived at all.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn send(&self, request: PreparedRequest) -> TransportResult<RawResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Redirects are followed by reqwest; statuses are never turned into errors.
#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a new reqwest backend.
    pub fn new() -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("revdesk/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    /// Wrap an existing client (shared connection pool).
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_request(&self, request: &PreparedRequest) -> reqwest::RequestBuilder {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .client
            .request(method, request.url.clone())
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }
        builder
    }
}

fn map_reqwest_error(err: &reqwest::Error, timeout: Duration) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout { after: timeout }
    } else if err.is_builder() {
        TransportError::Build {
            message: err.to_string(),
        }
    } else {
        TransportError::Unreachable {
            message: err.to_string(),
        }
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send(&self, request: PreparedRequest) -> TransportResult<RawResponse> {
        let timeout = request.timeout;
        let response = self
            .build_request(&request)
            .send()
            .await
            .map_err(|e| map_reqwest_error(&e, timeout))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| map_reqwest_error(&e, timeout))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Canned reply of the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedReply {
        /// An HTTP response with this status and JSON body.
        Json { status: u16, body: Value },
        /// An HTTP response with a raw body.
        Raw { status: u16, body: Vec<u8> },
        /// No response: connection refused, DNS failure...
        Unreachable(String),
        /// No response within the timeout.
        Timeout,
    }

    impl CannedReply {
        pub const fn json(status: u16, body: Value) -> Self {
            Self::Json { status, body }
        }
    }

    /// A fake HTTP backend that returns canned replies and records requests.
    ///
    /// Replies registered with `with_route` match when the request URL
    /// contains the pattern; `push_reply` queues one-shot replies consumed
    /// in order before routes are consulted.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        routes: Arc<Mutex<Vec<(String, CannedReply)>>>,
        queued: Arc<Mutex<VecDeque<CannedReply>>>,
        default_reply: Option<CannedReply>,
        requests: Arc<Mutex<Vec<PreparedRequest>>>,
    }

    impl FakeBackend {
        pub fn new() -> Self {
            Self::default()
        }

        /// Reply to URLs containing `url_contains`.
        #[must_use]
        pub fn with_route(self, url_contains: &str, reply: CannedReply) -> Self {
            self.routes
                .lock()
                .unwrap()
                .push((url_contains.to_string(), reply));
            self
        }

        /// Reply used when nothing else matches.
        #[must_use]
        pub fn with_default(mut self, reply: CannedReply) -> Self {
            self.default_reply = Some(reply);
            self
        }

        /// Queue a one-shot reply.
        pub fn push_reply(&self, reply: CannedReply) {
            self.queued.lock().unwrap().push_back(reply);
        }

        /// Every request received so far.
        pub fn requests(&self) -> Vec<PreparedRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// The most recent request.
        pub fn last_request(&self) -> Option<PreparedRequest> {
            self.requests.lock().unwrap().last().cloned()
        }

        fn find_reply(&self, url: &str) -> Option<CannedReply> {
            if let Some(reply) = self.queued.lock().unwrap().pop_front() {
                return Some(reply);
            }
            {
                let routes = self.routes.lock().unwrap();
                for (pattern, reply) in routes.iter() {
                    if url.contains(pattern.as_str()) {
                        return Some(reply.clone());
                    }
                }
            }
            self.default_reply.clone()
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn send(&self, request: PreparedRequest) -> TransportResult<RawResponse> {
            let reply = self.find_reply(request.url.as_str());
            let timeout = request.timeout;
            self.requests.lock().unwrap().push(request);

            match reply {
                Some(CannedReply::Json { status, body }) => Ok(RawResponse::json(status, &body)),
                Some(CannedReply::Raw { status, body }) => Ok(RawResponse::new(status, body)),
                Some(CannedReply::Unreachable(message)) => {
                    Err(TransportError::Unreachable { message })
                }
                Some(CannedReply::Timeout) => Err(TransportError::Timeout { after: timeout }),
                None => Ok(RawResponse::json(
                    404,
                    &serde_json::json!({"detail": "no canned reply"}),
                )),
            }
        }
    }
}
