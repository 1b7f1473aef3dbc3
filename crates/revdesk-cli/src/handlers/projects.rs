//! Project management commands.

use revdesk_core::QueryParams;
use revdesk_gateway::HttpBackend;

use super::{paging, parse_payload};
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{Notice, print_json};
use crate::project_commands::ProjectsCommand;

pub async fn execute<B: HttpBackend>(
    ctx: &CliContext<B>,
    command: ProjectsCommand,
) -> Result<(), CliError> {
    let gateway = ctx.gateway();
    let payload = match command {
        ProjectsCommand::List { enabled } => {
            gateway
                .projects(QueryParams::new().with_opt("review_enabled", enabled))
                .await?
        }
        ProjectsCommand::Show { id } => gateway.project_detail(&id).await?,
        ProjectsCommand::Enable { id } => {
            let result = gateway.enable_project(&id).await?;
            ctx.surface.success(Notice::ProjectEnabled.text(ctx.lang));
            result
        }
        ProjectsCommand::Disable { id } => {
            let result = gateway.disable_project(&id).await?;
            ctx.surface.success(Notice::ProjectDisabled.text(ctx.lang));
            result
        }
        ProjectsCommand::Update { id, payload } => {
            let result = gateway.update_project(&id, parse_payload(&payload)?).await?;
            ctx.surface.success(Notice::ProjectUpdated.text(ctx.lang));
            result
        }
        ProjectsCommand::Stats => gateway.project_stats().await?,
        ProjectsCommand::Logs {
            id,
            page,
            page_size,
        } => {
            gateway
                .project_webhook_logs(&id, paging(page, page_size))
                .await?
        }
        ProjectsCommand::History {
            id,
            page,
            page_size,
        } => {
            gateway
                .project_review_history(&id, paging(page, page_size))
                .await?
        }
    };
    print_json(&payload)
}
