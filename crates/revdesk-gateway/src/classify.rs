//! Maps raw transport results onto the closed outcome taxonomy.
//!
//! Success is decided by the status range alone: `[200, 300)` is success,
//! everything else is classified, whether or not the transport considered
//! it an error.

use revdesk_core::{EnvelopeVerdict, ErrorBody, Failure, FailureKind, Outcome, ResponseEnvelope};
use serde_json::Value;

use crate::config::FailureMessages;
use crate::error::TransportError;
use crate::http::RawResponse;

/// Decode a response body.
///
/// Empty bodies become `null`; bodies that are not JSON are kept as text.
pub fn decode_body(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify an HTTP response.
pub fn classify_response(response: &RawResponse, messages: &FailureMessages) -> Outcome {
    let body = decode_body(&response.body);

    if is_success(response.status) {
        return match ResponseEnvelope::inspect(&body) {
            EnvelopeVerdict::Success => Ok(body),
            EnvelopeVerdict::ApplicationError(message) => {
                let message = message.unwrap_or_else(|| messages.application.clone());
                Err(Failure::new(
                    FailureKind::ApplicationError {
                        message: message.clone(),
                    },
                    message,
                ))
            }
        };
    }

    let kind = FailureKind::from_status(response.status);
    let detail = ErrorBody::extract(&body).unwrap_or_else(|| messages.for_kind(&kind).to_string());
    Err(Failure::new(kind, detail))
}

/// Classify a call that produced no HTTP response.
pub fn classify_transport(_err: &TransportError, messages: &FailureMessages) -> Failure {
    Failure::new(FailureKind::NetworkUnreachable, messages.network.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn messages() -> FailureMessages {
        FailureMessages::english()
    }

    #[test]
    fn test_success_range_returns_body() {
        for status in [200, 201, 202, 204, 299] {
            let response = RawResponse::json(status, &json!({"items": [1, 2]}));
            let outcome = classify_response(&response, &messages());
            assert_eq!(outcome, Ok(json!({"items": [1, 2]})), "status {status}");
        }
    }

    #[test]
    fn test_empty_success_body_is_null() {
        let outcome = classify_response(&RawResponse::new(204, Vec::new()), &messages());
        assert_eq!(outcome, Ok(Value::Null));
    }

    #[test]
    fn test_text_success_body_is_kept() {
        let outcome = classify_response(&RawResponse::new(200, "pong"), &messages());
        assert_eq!(outcome, Ok(json!("pong")));
    }

    #[test]
    fn test_known_statuses_use_body_message() {
        let cases = [
            (401, FailureKind::Unauthorized),
            (403, FailureKind::Forbidden),
            (404, FailureKind::NotFound),
            (500, FailureKind::ServerError),
        ];
        for (status, kind) in cases {
            let response = RawResponse::json(status, &json!({"message": "db down"}));
            let failure = classify_response(&response, &messages()).unwrap_err();
            assert_eq!(failure.kind(), &kind);
            assert_eq!(failure.detail(), "db down");
        }
    }

    #[test]
    fn test_known_statuses_fall_back_to_defaults() {
        let m = messages();
        let cases = [
            (401, m.unauthorized.clone()),
            (403, m.forbidden.clone()),
            (404, m.not_found.clone()),
            (500, m.server_error.clone()),
            (502, m.request_failed.clone()),
        ];
        for (status, expected) in cases {
            let failure =
                classify_response(&RawResponse::new(status, "<html>oops</html>"), &m).unwrap_err();
            assert_eq!(failure.detail(), expected, "status {status}");
        }
    }

    #[test]
    fn test_other_statuses_preserve_code() {
        for status in [100, 304, 400, 409, 422, 429, 501, 503] {
            let failure =
                classify_response(&RawResponse::json(status, &json!({})), &messages()).unwrap_err();
            assert_eq!(failure.kind(), &FailureKind::OtherHttp { status });
        }
    }

    #[test]
    fn test_error_field_is_used_when_message_missing() {
        let response = RawResponse::json(500, &json!({"error": "Failed to update configs"}));
        let failure = classify_response(&response, &messages()).unwrap_err();
        assert_eq!(failure.detail(), "Failed to update configs");
    }

    #[test]
    fn test_validation_errors_on_bad_request_become_detail() {
        let response = RawResponse::json(
            400,
            &json!({
                "status": "error",
                "errors": {"review_enabled": ["Must be a valid boolean."]}
            }),
        );
        let failure = classify_response(&response, &messages()).unwrap_err();
        assert_eq!(failure.kind(), &FailureKind::OtherHttp { status: 400 });
        assert_eq!(
            failure.detail(),
            r#"{"review_enabled":["Must be a valid boolean."]}"#
        );
    }

    #[test]
    fn test_application_error_envelope() {
        let response =
            RawResponse::json(200, &json!({"status": "error", "message": "Project 3 not found"}));
        let failure = classify_response(&response, &messages()).unwrap_err();
        assert_eq!(
            failure.kind(),
            &FailureKind::ApplicationError {
                message: "Project 3 not found".to_string()
            }
        );
        assert_eq!(failure.detail(), "Project 3 not found");
    }

    #[test]
    fn test_application_error_without_message_uses_default() {
        let response = RawResponse::json(200, &json!({"status": "error"}));
        let failure = classify_response(&response, &messages()).unwrap_err();
        assert_eq!(failure.detail(), messages().application);
    }

    #[test]
    fn test_transport_errors_are_network_unreachable() {
        let errors = [
            TransportError::Unreachable {
                message: "dns error".to_string(),
            },
            TransportError::Timeout {
                after: Duration::from_secs(30),
            },
            TransportError::Build {
                message: "bad header".to_string(),
            },
        ];
        for err in &errors {
            let failure = classify_transport(err, &FailureMessages::chinese());
            assert_eq!(failure.kind(), &FailureKind::NetworkUnreachable);
            assert_eq!(failure.detail(), "网络连接失败");
        }
    }
}
