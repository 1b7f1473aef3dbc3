//! Response body conventions of the review backend.
//!
//! Two schemas are recognised:
//!
//! - [`ResponseEnvelope`]: a 2xx JSON object carrying `"status": "error"`
//!   reports a logical failure even though the HTTP exchange succeeded.
//! - [`ErrorBody`]: a non-2xx JSON object may carry a human-readable
//!   `message` (or `error`, or field-level `errors`) explaining the failure.
//!
//! Both are deserialized leniently: a body that does not match the schema is
//! treated as carrying no information rather than as an error.

use serde::Deserialize;
use serde_json::Value;

/// Status marker of the success envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
    #[serde(other)]
    Other,
}

/// Schema of a 2xx body that may report an application-level failure.
///
/// ```json
/// { "status": "error", "message": "Project 12 not found" }
/// { "status": "error", "errors": { "name": ["required"] } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    status: Option<EnvelopeStatus>,
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

/// What a 2xx body says about the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvelopeVerdict {
    Success,
    /// The body reports failure; carries the extracted message, if any.
    ApplicationError(Option<String>),
}

impl ResponseEnvelope {
    /// Parse the envelope out of a body. Non-objects yield `None`.
    pub fn parse(body: &Value) -> Option<Self> {
        if !body.is_object() {
            return None;
        }
        Self::deserialize(body).ok()
    }

    /// Decide whether a 2xx body is a success or an application error.
    pub fn inspect(body: &Value) -> EnvelopeVerdict {
        match Self::parse(body) {
            Some(envelope) if envelope.status == Some(EnvelopeStatus::Error) => {
                EnvelopeVerdict::ApplicationError(envelope.message())
            }
            _ => EnvelopeVerdict::Success,
        }
    }

    /// Human-readable message: `message`, then `error`, then a compact
    /// rendering of `errors`.
    pub fn message(&self) -> Option<String> {
        text_field(self.message.as_ref())
            .or_else(|| text_field(self.error.as_ref()))
            .or_else(|| self.errors.as_ref().and_then(render_errors))
    }
}

/// Schema of a non-2xx body.
///
/// ```json
/// { "code": 500, "message": "db down" }
/// { "status": "error", "errors": { "review_enabled": ["Must be a valid boolean."] } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl ErrorBody {
    pub fn parse(body: &Value) -> Option<Self> {
        if !body.is_object() {
            return None;
        }
        Self::deserialize(body).ok()
    }

    /// The body's `message` field, falling back to `error`, then to a
    /// compact rendering of `errors`.
    pub fn message(&self) -> Option<String> {
        text_field(self.message.as_ref())
            .or_else(|| text_field(self.error.as_ref()))
            .or_else(|| self.errors.as_ref().and_then(render_errors))
    }

    /// Shortcut for `parse(body)?.message()`.
    pub fn extract(body: &Value) -> Option<String> {
        Self::parse(body).and_then(|b| b.message())
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn render_errors(errors: &Value) -> Option<String> {
    match errors {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_owned()).filter(|s| !s.is_empty()),
        Value::Object(map) if map.is_empty() => None,
        Value::Array(items) if items.is_empty() => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_payload_is_success() {
        let body = json!({"total_reviews": 12, "projects": 3});
        assert_eq!(ResponseEnvelope::inspect(&body), EnvelopeVerdict::Success);
    }

    #[test]
    fn test_success_status_is_success() {
        let body = json!({"status": "success", "message": "Review process started"});
        assert_eq!(ResponseEnvelope::inspect(&body), EnvelopeVerdict::Success);
    }

    #[test]
    fn test_unknown_status_is_success() {
        let body = json!({"status": "ok", "message": "running"});
        assert_eq!(ResponseEnvelope::inspect(&body), EnvelopeVerdict::Success);
    }

    #[test]
    fn test_non_object_bodies_are_success() {
        for body in [json!([1, 2]), json!("text"), json!(null), json!(42)] {
            assert_eq!(ResponseEnvelope::inspect(&body), EnvelopeVerdict::Success);
        }
    }

    #[test]
    fn test_error_status_with_message() {
        let body = json!({"status": "error", "message": "Project 9 not found"});
        assert_eq!(
            ResponseEnvelope::inspect(&body),
            EnvelopeVerdict::ApplicationError(Some("Project 9 not found".to_string()))
        );
    }

    #[test]
    fn test_error_status_falls_back_to_errors() {
        let body = json!({"status": "error", "errors": {"name": ["required"]}});
        assert_eq!(
            ResponseEnvelope::inspect(&body),
            EnvelopeVerdict::ApplicationError(Some(r#"{"name":["required"]}"#.to_string()))
        );
    }

    #[test]
    fn test_error_status_without_message() {
        let body = json!({"status": "error"});
        assert_eq!(
            ResponseEnvelope::inspect(&body),
            EnvelopeVerdict::ApplicationError(None)
        );
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body = json!({"code": 500, "message": "db down", "error": "ignored"});
        assert_eq!(ErrorBody::extract(&body), Some("db down".to_string()));
    }

    #[test]
    fn test_error_body_uses_error_field() {
        let body = json!({"error": "Failed to update configs: timeout"});
        assert_eq!(
            ErrorBody::extract(&body),
            Some("Failed to update configs: timeout".to_string())
        );
    }

    #[test]
    fn test_error_body_falls_back_to_field_errors() {
        let body = json!({
            "status": "error",
            "errors": {"review_enabled": ["Must be a valid boolean."]}
        });
        assert_eq!(
            ErrorBody::extract(&body),
            Some(r#"{"review_enabled":["Must be a valid boolean."]}"#.to_string())
        );
        assert_eq!(ErrorBody::extract(&json!({"errors": {}})), None);
    }

    #[test]
    fn test_error_body_ignores_blank_and_non_string_message() {
        assert_eq!(ErrorBody::extract(&json!({"message": "  "})), None);
        assert_eq!(ErrorBody::extract(&json!({"message": 12})), None);
        assert_eq!(ErrorBody::extract(&json!("plain text")), None);
    }
}
