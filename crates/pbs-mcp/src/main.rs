//! Stdio entry point for the PBS MCP server.

use anyhow::Result;

use pbs_core::{ApiConfig, PbsClient};
use pbs_mcp::McpServer;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();

    let client = PbsClient::new(ApiConfig::from_env());
    McpServer::new(client).run().await?;

    Ok(())
}
