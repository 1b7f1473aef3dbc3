//! Command handlers that delegate to the gateway.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext<B>, ...) -> Result<(), CliError>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call one gateway operation
//!   3. Print the payload and, for mutations, show a success notice
//!
//! Failures need no handling here: the gateway has already shown them.

pub mod config;
pub mod projects;
pub mod reviews;
pub mod system;

use revdesk_core::QueryParams;
use revdesk_gateway::HttpBackend;
use serde_json::Value;

use crate::bootstrap::CliContext;
use crate::commands::Commands;
use crate::error::CliError;

/// Route a parsed command to its handler.
pub async fn dispatch<B: HttpBackend>(ctx: &CliContext<B>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Stats => system::stats(ctx).await,
        Commands::SystemInfo => system::info(ctx).await,
        Commands::Reviews { command } => reviews::execute(ctx, command).await,
        Commands::Logs { page, page_size } => reviews::logs(ctx, page, page_size).await,
        Commands::Config { command } => config::execute(ctx, command).await,
        Commands::Projects { command } => projects::execute(ctx, command).await,
        Commands::TestWebhook { payload } => system::test_webhook(ctx, &payload).await,
    }
}

/// Parse a JSON argument.
pub fn parse_payload(raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|e| CliError::Arguments(format!("payload is not valid JSON: {e}")))
}

/// Paging parameters in the order the backend documents them.
pub fn paging(page: Option<u32>, page_size: Option<u32>) -> QueryParams {
    QueryParams::new()
        .with_opt("page", page)
        .with_opt("page_size", page_size)
}


#[cfg(test)]
mod tests {
    use super::test_support::context;
    use super::*;
    use revdesk_core::FailureKind;
    use revdesk_gateway::testing::{CannedReply, FakeBackend};
    use serde_json::json;

    #[test]
    fn test_parse_payload_rejects_garbage() {
        let err = parse_payload("{not json").unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(parse_payload(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_paging_skips_missing_values() {
        assert!(paging(None, None).is_empty());
        let query = paging(Some(3), Some(20));
        let pairs: Vec<_> = query.iter().collect();
        assert_eq!(pairs, vec![("page", "3"), ("page_size", "20")]);
    }

    #[tokio::test]
    async fn test_dispatch_failure_becomes_request_error() {
        let backend =
            FakeBackend::new().with_default(CannedReply::json(401, json!({})));
        let (ctx, renderer) = context(backend);

        let err = dispatch(&ctx, Commands::Stats).await.unwrap_err();

        match &err {
            CliError::Request(failure) => assert_eq!(failure.kind(), &FailureKind::Unauthorized),
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.exit_code(), 77);
        assert_eq!(renderer.rendered_messages(), vec!["Unauthorized, please sign in again"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_surface_idle() {
        let backend =
            FakeBackend::new().with_default(CannedReply::Unreachable("refused".to_string()));
        let (ctx, _) = context(backend);

        assert!(dispatch(&ctx, Commands::SystemInfo).await.is_err());
        assert!(ctx.surface.has_container());

        ctx.settle().await;
        assert!(!ctx.surface.has_container());
    }
}
