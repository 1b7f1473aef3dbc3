//! Endpoint registry: logical backend operations and their paths.
//!
//! Paths are relative to the configured API base path. Identifiers are
//! substituted positionally and percent-encoded. The gateway never looks
//! inside the resolved string.

use std::fmt;

/// A backend operation the console can call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Statistics,
    Reviews,
    ReviewDetail(String),
    Config,
    ConfigSummary,
    ConfigBatchUpdate,
    Logs,
    SystemInfo,
    WebhookTest,
    Projects,
    ProjectDetail(String),
    ProjectEnable(String),
    ProjectDisable(String),
    ProjectUpdate(String),
    ProjectStats,
    ProjectWebhookLogs(String),
    ProjectReviewHistory(String),
}

impl Endpoint {
    /// Resolve the endpoint to its path.
    pub fn path(&self) -> String {
        match self {
            Self::Statistics => "/statistics".to_string(),
            Self::Reviews => "/webhook/reviews/".to_string(),
            Self::ReviewDetail(id) => format!("/webhook/reviews/{}/", encode(id)),
            Self::Config => "/config/".to_string(),
            Self::ConfigSummary => "/configs/summary/".to_string(),
            Self::ConfigBatchUpdate => "/configs/batch_update/".to_string(),
            Self::Logs => "/webhook/logs/".to_string(),
            Self::SystemInfo => "/system/info".to_string(),
            Self::WebhookTest => "/test/webhook".to_string(),
            Self::Projects => "/webhook/projects/".to_string(),
            Self::ProjectDetail(id) => format!("/webhook/projects/{}", encode(id)),
            Self::ProjectEnable(id) => format!("/webhook/projects/{}/enable", encode(id)),
            Self::ProjectDisable(id) => format!("/webhook/projects/{}/disable", encode(id)),
            Self::ProjectUpdate(id) => format!("/webhook/projects/{}/update", encode(id)),
            Self::ProjectStats => "/webhook/projects/stats/".to_string(),
            Self::ProjectWebhookLogs(id) => {
                format!("/webhook/projects/{}/webhook-logs", encode(id))
            }
            Self::ProjectReviewHistory(id) => {
                format!("/webhook/projects/{}/review-history", encode(id))
            }
        }
    }

    /// Whether the backend proxies this call to a slow downstream step and
    /// needs the extended timeout.
    pub const fn is_slow(&self) -> bool {
        matches!(self, Self::WebhookTest)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn encode(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_paths() {
        assert_eq!(Endpoint::Statistics.path(), "/statistics");
        assert_eq!(Endpoint::Config.path(), "/config/");
        assert_eq!(Endpoint::ConfigBatchUpdate.path(), "/configs/batch_update/");
        assert_eq!(Endpoint::ProjectStats.path(), "/webhook/projects/stats/");
    }

    #[test]
    fn test_identifier_substitution() {
        assert_eq!(
            Endpoint::ReviewDetail("42".into()).path(),
            "/webhook/reviews/42/"
        );
        assert_eq!(
            Endpoint::ProjectEnable("7".into()).path(),
            "/webhook/projects/7/enable"
        );
        assert_eq!(
            Endpoint::ProjectReviewHistory("7".into()).path(),
            "/webhook/projects/7/review-history"
        );
    }

    #[test]
    fn test_identifier_is_percent_encoded() {
        assert_eq!(
            Endpoint::ProjectDetail("group/app".into()).path(),
            "/webhook/projects/group%2Fapp"
        );
    }

    #[test]
    fn test_only_webhook_test_is_slow() {
        assert!(Endpoint::WebhookTest.is_slow());
        assert!(!Endpoint::Config.is_slow());
        assert!(!Endpoint::ConfigBatchUpdate.is_slow());
    }
}
