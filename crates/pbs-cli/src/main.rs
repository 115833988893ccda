//! CLI entry point - the composition root.
//!
//! The forwarding client is constructed once here and handed to the
//! command handlers.

use clap::Parser;

use pbs_cli::handlers;
use pbs_cli::{Cli, Commands};
use pbs_core::{ApiConfig, PbsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging on stderr; stdout is reserved for results
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let client = PbsClient::new(ApiConfig::from_env());

    match command {
        Commands::ListEndpoints => {
            handlers::list_endpoints::execute()?;
        }
        Commands::Info => {
            handlers::info::execute(&client).await?;
        }
        Commands::Prescribers {
            limit,
            page,
            pbs_code,
            schedule_code,
            prescriber_type,
            fields,
            latest,
        } => {
            let args = handlers::prescribers::PrescriberArgs {
                limit,
                page,
                pbs_code,
                schedule_code,
                prescriber_type,
                fields,
                latest,
            };
            handlers::prescribers::execute(&client, args).await?;
        }
        Commands::ItemOverview {
            limit,
            page,
            schedule_code,
            fields,
            latest,
        } => {
            let args = handlers::item_overview::ItemOverviewArgs {
                limit,
                page,
                schedule_code,
                fields,
                latest,
            };
            handlers::item_overview::execute(&client, args).await?;
        }
        Commands::Query {
            endpoint,
            method,
            params,
            subscription_key,
            timeout,
        } => {
            let args = handlers::query::QueryArgs {
                endpoint,
                method,
                params,
                subscription_key,
                timeout,
            };
            handlers::query::execute(&client, args).await?;
        }
        Commands::Serve { port } => {
            handlers::serve::execute(port).await?;
        }
    }

    Ok(())
}
