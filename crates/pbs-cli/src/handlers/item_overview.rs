//! `item-overview` command handler.

use std::collections::BTreeMap;

use anyhow::Result;

use pbs_core::{ForwardRequest, PbsClient};

/// Typed filters accepted by the item-overview command.
#[derive(Debug, Clone)]
pub struct ItemOverviewArgs {
    pub limit: String,
    pub page: String,
    pub schedule_code: Option<String>,
    pub fields: Option<String>,
    pub latest: bool,
}

fn build_params(args: &ItemOverviewArgs) -> BTreeMap<String, String> {
    let mut params = BTreeMap::new();
    params.insert("limit".to_string(), args.limit.clone());
    params.insert("page".to_string(), args.page.clone());
    if let Some(code) = &args.schedule_code {
        params.insert("schedule_code".to_string(), code.clone());
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

/// Query the item-overview endpoint with the given filters.
pub async fn execute(client: &PbsClient, args: ItemOverviewArgs) -> Result<()> {
    let request = ForwardRequest {
        endpoint: "item-overview".to_string(),
        params: build_params(&args),
        ..ForwardRequest::default()
    };
    let output = client.forward(&request).await.render();
    println!("{}", output.first_text());
    Ok(())
}
