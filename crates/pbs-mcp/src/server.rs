//! Stdio MCP server: newline-delimited JSON-RPC over stdin/stdout.
//!
//! A bad line never crashes the process; it is answered with a parse
//! error and the loop keeps reading. Forwarding failures are not
//! protocol errors either: `tools/call` answers them as a successful
//! result whose content is the rendered error envelope.

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tracing::{debug, error, info};

use pbs_core::{PbsClient, call_tool, tool_descriptor};

use crate::protocol::{self, JsonRpcRequest, JsonRpcResponse};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "pbs-mcp";

/// Stdio tool-protocol server around the forwarding client.
pub struct McpServer {
    client: PbsClient,
}

impl McpServer {
    #[must_use]
    pub const fn new(client: PbsClient) -> Self {
        Self { client }
    }

    /// Serve requests from stdin until EOF.
    pub async fn run(&self) -> std::io::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = BufWriter::new(tokio::io::stdout());
        let mut lines = stdin.lines();

        info!("MCP server running on stdio");

        while let Some(line) = lines.next_line().await? {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
                Ok(request) => self.handle_request(request).await,
                Err(err) => Some(JsonRpcResponse::failure(
                    Value::Null,
                    protocol::PARSE_ERROR,
                    format!("Parse error: {err}"),
                )),
            };

            if let Some(response) = response {
                let payload =
                    serde_json::to_string(&response).map_err(std::io::Error::other)?;
                stdout.write_all(payload.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
        }

        Ok(())
    }

    /// Dispatch one request. Notifications (no id) produce no response.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let Some(id) = request.id else {
            debug!(method = %request.method, "Ignoring notification");
            return None;
        };

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, initialize_result()),
            "tools/list" => {
                JsonRpcResponse::success(id, json!({ "tools": [tool_descriptor()] }))
            }
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => JsonRpcResponse::failure(
                id,
                protocol::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        };
        Some(response)
    }

    async fn handle_tool_call(&self, id: Value, params: Value) -> JsonRpcResponse {
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| json!({}));

        info!(tool = %name, arguments = %arguments, "Calling tool");

        match call_tool(&self.client, &name, arguments).await {
            Ok(output) => match serde_json::to_value(&output) {
                Ok(result) => JsonRpcResponse::success(id, result),
                Err(err) => {
                    JsonRpcResponse::failure(id, protocol::INTERNAL_ERROR, err.to_string())
                }
            },
            Err(err) => {
                error!(error = %err, "Tool call failed");
                JsonRpcResponse::failure(id, protocol::INVALID_PARAMS, err.to_string())
            }
        }
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pbs_core::ApiConfig;

    fn request(raw: &str) -> JsonRpcRequest {
        serde_json::from_str(raw).expect("valid request")
    }

    fn server() -> McpServer {
        // Unreachable upstream; the tests below either never forward or
        // expect the no-response envelope.
        McpServer::new(PbsClient::new(
            ApiConfig::default().with_base_url("http://127.0.0.1:9"),
        ))
    }

    #[tokio::test]
    async fn initialize_reports_server_info_and_capabilities() {
        let response = server()
            .handle_request(request(r#"{"jsonrpc":"2.0","id":1,"method":"initialize"}"#))
            .await
            .expect("response for request with id");
        let result = response.result.expect("success");
        assert_eq!(result["protocolVersion"], json!(PROTOCOL_VERSION));
        assert_eq!(result["serverInfo"]["name"], json!("pbs-mcp"));
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn tools_list_advertises_exactly_one_tool() {
        let response = server()
            .handle_request(request(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#))
            .await
            .expect("response");
        let tools = response.result.expect("success")["tools"].clone();
        assert_eq!(tools.as_array().map(Vec::len), Some(1));
        assert_eq!(tools[0]["name"], json!("pbs_api"));
    }

    #[tokio::test]
    async fn notifications_get_no_response() {
        let response = server()
            .handle_request(request(
                r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            ))
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn unknown_methods_fail_with_method_not_found() {
        let response = server()
            .handle_request(request(
                r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#,
            ))
            .await
            .expect("response");
        let error = response.error.expect("failure");
        assert_eq!(error.code, protocol::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_tool_names_fail_per_protocol() {
        let response = server()
            .handle_request(request(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":{"name":"not_a_tool","arguments":{}}}"#,
            ))
            .await
            .expect("response");
        let error = response.error.expect("failure");
        assert_eq!(error.code, protocol::INVALID_PARAMS);
        assert_eq!(error.message, "Unknown tool: not_a_tool");
    }

    #[tokio::test]
    async fn forwarding_failures_are_results_not_protocol_errors() {
        let response = server()
            .handle_request(request(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"pbs_api","arguments":{"endpoint":"prescribers","timeout":2000}}}"#,
            ))
            .await
            .expect("response");
        let result = response.result.expect("tool errors are still results");
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("\"error\": true"));
        assert!(text.contains("No response received from server"));
    }
}
