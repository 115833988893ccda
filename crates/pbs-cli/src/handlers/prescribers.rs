//! `prescribers` command handler.

use std::collections::BTreeMap;

use anyhow::Result;

use pbs_core::{ForwardRequest, PbsClient};

/// Typed filters accepted by the prescribers command.
#[derive(Debug, Clone)]
pub struct PrescriberArgs {
    pub limit: String,
    pub page: String,
    pub pbs_code: Option<String>,
    pub schedule_code: Option<String>,
    pub prescriber_type: Option<String>,
    pub fields: Option<String>,
    pub latest: bool,
}

/// Shape CLI flags into upstream query parameters.
fn build_params(args: &PrescriberArgs) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("limit".to_string(), args.limit.clone());
    params.insert("page".to_string(), args.page.clone());
    if let Some(code) = &args.pbs_code {
        params.insert("pbs_code".to_string(), code.clone());
    }
    if let Some(code) = &args.schedule_code {
        params.insert("schedule_code".to_string(), code.clone());
    }
    if let Some(kind) = &args.prescriber_type {
        params.insert("prescriber_type".to_string(), kind.clone());
    }
    if let Some(fields) = &args.fields {
        params.insert("fields".to_string(), fields.clone());
    }
    if args.latest {
        params.insert(
            "get_latest_schedule_only".to_string(),
            "true".to_string(),
        );
    }
    params
}

/// Query the prescribers endpoint with the given filters.
pub async fn execute(client: &PbsClient, args: PrescriberArgs) -> Result<()> {
    let request = ForwardRequest {
        endpoint: "prescribers".to_string(),
        params: build_params(&args),
        ..ForwardRequest::default()
    };
    let output = client.forward(&request).await.render();
    println!("{}", output.first_text());
    Ok(())
}
