//! The single `pbs_api` tool: descriptor and dispatch.
//!
//! There is exactly one capability, so dispatch is a name guard in
//! front of the forwarding operation rather than a registry. The HTTP
//! and stdio adapters call [`call_tool`] with their caller's tool name
//! and raw arguments; the CLI shapes [`ForwardRequest`]s directly.

use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

use crate::envelope::ToolOutput;
use crate::forward::PbsClient;
use crate::request::ForwardRequest;

/// Name of the one tool every adapter exposes.
pub const TOOL_NAME: &str = "pbs_api";

/// Tool description shared by every adapter.
pub const TOOL_DESCRIPTION: &str = "Access the Australian Pharmaceutical Benefits Scheme (PBS) \
     API to retrieve information about medicines, pricing, and availability.";

/// Tool descriptor advertised by `tools/list` and the HTTP surface.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Build the `pbs_api` descriptor with its input schema.
///
/// The schema mirrors [`ForwardRequest`]'s wire shape.
#[must_use]
pub fn tool_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: TOOL_NAME,
        description: TOOL_DESCRIPTION,
        input_schema: json!({
            "type": "object",
            "properties": {
                "endpoint": {
                    "type": "string",
                    "description": "The specific PBS API endpoint to access (e.g., \"prescribers\", \"item-overview\")"
                },
                "method": {
                    "type": "string",
                    "enum": ["GET", "POST"],
                    "default": "GET",
                    "description": "HTTP method to use (GET is recommended for most PBS API operations)"
                },
                "params": {
                    "type": "object",
                    "additionalProperties": { "type": "string" },
                    "description": "Query parameters to include in the request (e.g., {\"get_latest_schedule_only\": \"true\"})"
                },
                "subscriptionKey": {
                    "type": "string",
                    "description": "Custom subscription key (if not provided, the default public key will be used)"
                },
                "timeout": {
                    "type": "number",
                    "default": 30000,
                    "description": "Request timeout in milliseconds"
                }
            },
            "required": ["endpoint"]
        }),
    }
}

/// Failures raised by dispatch itself. Forwarding failures are not
/// errors at this level; they come back inside the rendered envelope.
#[derive(Debug, Error)]
pub enum ToolCallError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    #[error("Invalid tool arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

/// Dispatch a tool call by name.
pub async fn call_tool(
    client: &PbsClient,
    name: &str,
    arguments: Value,
) -> Result<ToolOutput, ToolCallError> {
    if name != TOOL_NAME {
        return Err(ToolCallError::UnknownTool(name.to_string()));
    }
    let request: ForwardRequest = serde_json::from_value(arguments)?;
    Ok(client.forward(&request).await.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    #[test]
    fn descriptor_advertises_the_forward_request_shape() {
        let descriptor = tool_descriptor();
        assert_eq!(descriptor.name, "pbs_api");
        assert_eq!(descriptor.input_schema["required"], json!(["endpoint"]));
        assert_eq!(
            descriptor.input_schema["properties"]["method"]["enum"],
            json!(["GET", "POST"])
        );
    }

    #[tokio::test]
    async fn unknown_tool_names_are_refused() {
        let client = PbsClient::new(ApiConfig::default());
        let err = call_tool(&client, "not_a_tool", json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: not_a_tool");
    }

    #[tokio::test]
    async fn malformed_arguments_are_refused_before_dispatch() {
        let client = PbsClient::new(ApiConfig::default());
        let err = call_tool(&client, TOOL_NAME, json!({"params": {"limit": 5}}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolCallError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn forwarding_failures_come_back_rendered_not_raised() {
        let client = PbsClient::new(ApiConfig::default().with_base_url("http://127.0.0.1:9"));
        let output = call_tool(
            &client,
            TOOL_NAME,
            json!({"endpoint": "prescribers", "timeout": 2000}),
        )
        .await
        .expect("dispatch succeeds even when forwarding fails");
        assert!(output.first_text().contains("No response received from server"));
    }
}
