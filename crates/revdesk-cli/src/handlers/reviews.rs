//! Review records and webhook logs.

use revdesk_core::QueryParams;
use revdesk_gateway::HttpBackend;

use super::paging;
use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_json;
use crate::review_commands::ReviewsCommand;

pub async fn execute<B: HttpBackend>(
    ctx: &CliContext<B>,
    command: ReviewsCommand,
) -> Result<(), CliError> {
    let payload = match command {
        ReviewsCommand::List {
            page,
            page_size,
            search,
        } => {
            let query: QueryParams = paging(page, page_size).with_opt("search", search);
            ctx.gateway().reviews(query).await?
        }
        ReviewsCommand::Show { id } => ctx.gateway().review_detail(&id).await?,
    };
    print_json(&payload)
}

pub async fn logs<B: HttpBackend>(
    ctx: &CliContext<B>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> Result<(), CliError> {
    let payload = ctx.gateway().logs(paging(page, page_size)).await?;
    print_json(&payload)
}
