//! Server bootstrap - the composition root for the HTTP adapter.
//!
//! This is the only place where the forwarding client is constructed
//! for the web server.

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use pbs_core::{ApiConfig, PbsClient};

use crate::routes::create_router;
use crate::state::AxumContext;

/// Default HTTP port when neither flag nor environment say otherwise.
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration for the HTTP adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Upstream API configuration.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Configuration from the environment: `PORT` for the listen port,
    /// upstream settings via [`ApiConfig::from_env`].
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            port,
            api: ApiConfig::from_env(),
        }
    }

    /// Override the listen port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Build the application context for the HTTP adapter.
#[must_use]
pub fn bootstrap(config: &ServerConfig) -> AxumContext {
    AxumContext {
        client: PbsClient::new(config.api.clone()),
    }
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config);
    let app = create_router(ctx);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("PBS MCP HTTP server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_port_overrides_the_listen_port() {
        let config = ServerConfig {
            port: DEFAULT_PORT,
            api: ApiConfig::default(),
        }
        .with_port(8081);
        assert_eq!(config.port, 8081);
    }
}
