//! Backend configuration commands.

use revdesk_gateway::HttpBackend;

use super::parse_payload;
use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;
use crate::presentation::{Notice, print_json};

pub async fn execute<B: HttpBackend>(
    ctx: &CliContext<B>,
    command: ConfigCommand,
) -> Result<(), CliError> {
    let gateway = ctx.gateway();
    let payload = match command {
        ConfigCommand::Get => gateway.config().await?,
        ConfigCommand::Summary => gateway.config_summary().await?,
        ConfigCommand::Set { payload } => {
            let saved = gateway.update_config(parse_payload(&payload)?).await?;
            ctx.surface.success(Notice::ConfigSaved.text(ctx.lang));
            saved
        }
        ConfigCommand::Batch { payload } => {
            let saved = gateway
                .batch_update_configs(parse_payload(&payload)?)
                .await?;
            ctx.surface
                .success(Notice::ConfigsBatchSaved.text(ctx.lang));
            saved
        }
    };
    print_json(&payload)
}
