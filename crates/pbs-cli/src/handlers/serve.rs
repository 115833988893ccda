//! `serve` command handler - launches the HTTP adapter.

use anyhow::Result;

use pbs_axum::ServerConfig;

/// Start the HTTP + SSE server.
///
/// The flag wins over the `PORT` environment variable, which wins over
/// the default.
pub async fn execute(port: Option<u16>) -> Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config = config.with_port(port);
    }
    pbs_axum::start_server(config).await
}
