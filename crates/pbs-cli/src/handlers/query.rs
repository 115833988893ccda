//! `query` command handler - fully generic endpoint access.

use std::collections::BTreeMap;

use anyhow::{Context, Result};

use pbs_core::{ForwardRequest, Method, PbsClient};

/// Arguments for the generic query command.
#[derive(Debug, Clone)]
pub struct QueryArgs {
    pub endpoint: String,
    pub method: Method,
    pub params: Option<String>,
    pub subscription_key: Option<String>,
    pub timeout: u64,
}

/// Parse the `--params` JSON object string into query parameters.
fn parse_params(raw: &str) -> Result<BTreeMap<String, String>> {
    serde_json::from_str(raw).context("Error parsing params JSON")
}

/// Forward a fully caller-specified request.
pub async fn execute(client: &PbsClient, args: QueryArgs) -> Result<()> {
    let params = match args.params.as_deref() {
        Some(raw) => parse_params(raw)?,
        None => BTreeMap::new(),
    };

    let request = ForwardRequest {
        endpoint: args.endpoint,
        method: args.method,
        params,
        subscription_key: args.subscription_key,
        timeout_ms: args.timeout,
    };

    let output = client.forward(&request).await.render();
    println!("{}", output.first_text());
    Ok(())
}
