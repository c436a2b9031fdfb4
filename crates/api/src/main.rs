//! ClientDesk - client, project, task and invoice tracking
//!
//! Prints the requested collection, or the dashboard, as JSON.

use anyhow::Context;
use clientdesk_lib::cli::{self, CliCommand};
use clientdesk_lib::utils::logging::init_tracing;
use clientdesk_lib::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading configuration from the environment
    let dotenv = dotenvy::dotenv();

    let config = clientdesk_infra::config::load().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let command = CliCommand::from_args(std::env::args().skip(1))?;
    let ctx = AppContext::new_with_config(config)?;

    tracing::info!(%command, "running command");
    let output = cli::run(&ctx, command).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
