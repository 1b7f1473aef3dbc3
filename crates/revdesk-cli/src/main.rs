//! CLI entry point - the composition root.
//!
//! Loads `.env`, resolves settings, wires the gateway to a terminal
//! notification surface and dispatches the command. Backend failures are
//! already on screen as toasts by the time they reach this level; only the
//! exit code is derived from them here.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use revdesk_cli::{Cli, CliConfig, CliError, bootstrap, handlers};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before reading REVDESK_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let cli_error = err.downcast_ref::<CliError>();
            if !cli_error.is_some_and(CliError::is_notified) {
                eprintln!("{} {err:#}", style("error:").red().bold().for_stderr());
            }
            let code = cli_error.map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_env(cli.origin.as_deref(), cli.lang)?;
    let ctx = bootstrap(&config)?;

    let result = handlers::dispatch(&ctx, cli.command).await;
    ctx.settle().await;

    result?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
