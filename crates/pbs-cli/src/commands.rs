//! Main commands enum and subcommand flags.

use clap::Subcommand;

use pbs_core::{DEFAULT_TIMEOUT_MS, Method};

/// Available commands for the PBS API gateway.
#[derive(Subcommand)]
pub enum Commands {
    /// List all known PBS API endpoints
    ListEndpoints,

    /// Get PBS API information from the root endpoint
    Info,

    /// Query PBS prescribers
    Prescribers {
        /// Number of results per page
        #[arg(short = 'l', long, default_value = "10")]
        limit: String,
        /// Page number
        #[arg(short = 'p', long, default_value = "1")]
        page: String,
        /// Filter by PBS code
        #[arg(short = 'c', long)]
        pbs_code: Option<String>,
        /// Filter by schedule code
        #[arg(short = 's', long)]
        schedule_code: Option<String>,
        /// Filter by prescriber type
        #[arg(short = 't', long)]
        prescriber_type: Option<String>,
        /// Specific fields to return
        #[arg(short = 'f', long)]
        fields: Option<String>,
        /// Get only the latest schedule
        #[arg(long)]
        latest: bool,
    },

    /// Query PBS item overview
    ItemOverview {
        /// Number of results per page
        #[arg(short = 'l', long, default_value = "10")]
        limit: String,
        /// Page number
        #[arg(short = 'p', long, default_value = "1")]
        page: String,
        /// Filter by schedule code
        #[arg(short = 's', long)]
        schedule_code: Option<String>,
        /// Specific fields to return
        #[arg(short = 'f', long)]
        fields: Option<String>,
        /// Get only the latest schedule
        #[arg(long)]
        latest: bool,
    },

    /// Query any PBS API endpoint
    Query {
        /// Endpoint path to query
        endpoint: String,
        /// HTTP method (GET or POST)
        #[arg(short = 'm', long, default_value = "GET")]
        method: Method,
        /// Query parameters as a JSON object string
        #[arg(short = 'p', long)]
        params: Option<String>,
        /// Custom subscription key
        #[arg(short = 'k', long)]
        subscription_key: Option<String>,
        /// Request timeout in milliseconds
        #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_MS)]
        timeout: u64,
    },

    /// Start the PBS MCP HTTP server
    Serve {
        /// Port to listen on (defaults to the PORT env var, then 3000)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Cli;
    use crate::commands::Commands;
    use pbs_core::Method;

    #[test]
    fn query_parses_method_and_timeout() {
        let cli = Cli::parse_from([
            "pbs-mcp", "query", "schedules", "-m", "post", "--timeout", "5000",
        ]);
        let Some(Commands::Query {
            endpoint,
            method,
            timeout,
            ..
        }) = cli.command
        else {
            panic!("expected query command");
        };
        assert_eq!(endpoint, "schedules");
        assert_eq!(method, Method::Post);
        assert_eq!(timeout, 5000);
    }

    #[test]
    fn query_rejects_unsupported_methods() {
        let result = Cli::try_parse_from(["pbs-mcp", "query", "schedules", "-m", "DELETE"]);
        assert!(result.is_err());
    }

    #[test]
    fn prescribers_defaults_limit_and_page() {
        let cli = Cli::parse_from(["pbs-mcp", "prescribers"]);
        let Some(Commands::Prescribers {
            limit,
            page,
            latest,
            ..
        }) = cli.command
        else {
            panic!("expected prescribers command");
        };
        assert_eq!(limit, "10");
        assert_eq!(page, "1");
        assert!(!latest);
    }
}
