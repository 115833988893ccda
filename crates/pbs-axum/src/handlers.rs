//! HTTP route handlers.
//!
//! Handlers delegate to the shared forwarding client in `pbs-core`;
//! the SSE invocation handlers live in [`crate::sse`].

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use serde_json::{Value, json};
use tracing::info;

use crate::error::HttpError;
use crate::state::AppState;
use pbs_core::{ToolOutput, call_tool, tool_descriptor};

/// Embedded test client page served at `/`.
const CLIENT_PAGE: &str = include_str!("../static/client.html");

/// Serve the bundled test client.
pub async fn client_page() -> Html<&'static str> {
    Html(CLIENT_PAGE)
}

/// Health check endpoint.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "PBS MCP server is running" }))
}

/// List the advertised tools.
pub async fn tools() -> Json<Value> {
    Json(json!({ "tools": [tool_descriptor()] }))
}

/// Single-shot tool invocation over plain JSON.
///
/// Unknown tool names yield 404; malformed arguments 400. Forwarding
/// failures still return 200 with the error envelope rendered in the
/// body, the same shape the other transports produce.
pub async fn invoke(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<ToolOutput>, HttpError> {
    info!(tool = %tool_name, args = %args, "Invoking tool");
    let output = call_tool(&state.client, &tool_name, args).await?;
    Ok(Json(output))
}
