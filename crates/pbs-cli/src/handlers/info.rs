//! `info` command handler.

use anyhow::Result;

use pbs_core::{ForwardRequest, PbsClient};

/// Fetch and print root endpoint metadata.
pub async fn execute(client: &PbsClient) -> Result<()> {
    let request = ForwardRequest::default();
    let output = client.forward(&request).await.render();
    println!("{}", output.first_text());
    Ok(())
}
