//! Statistics, system information and the webhook self-test.

use revdesk_gateway::HttpBackend;

use super::parse_payload;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{Notice, print_json};

pub async fn stats<B: HttpBackend>(ctx: &CliContext<B>) -> Result<(), CliError> {
    let payload = ctx.gateway().statistics().await?;
    print_json(&payload)
}

pub async fn info<B: HttpBackend>(ctx: &CliContext<B>) -> Result<(), CliError> {
    let payload = ctx.gateway().system_info().await?;
    print_json(&payload)
}

/// Send a test webhook. The backend answers only after the review pipeline
/// has run, so this may take a while.
pub async fn test_webhook<B: HttpBackend>(ctx: &CliContext<B>, raw: &str) -> Result<(), CliError> {
    let body = parse_payload(raw)?;
    let payload = ctx.gateway().test_webhook(body).await?;
    ctx.surface.success(Notice::WebhookTestSent.text(ctx.lang));
    print_json(&payload)
}
