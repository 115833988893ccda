//! SSE endpoints: tool announcement and staged invocation.
//!
//! The staged stream emits `start`, then `result` or `error`, then
//! `end` on the success path. The forward runs in a spawned task
//! feeding a channel, so a client that goes away mid-call drops the
//! stream without aborting the in-flight upstream request. No
//! keep-alive heartbeats are sent beyond the initial comment line.

use std::convert::Infallible;
use std::task::Poll;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::sse::{Event, Sse};
use futures_util::stream::{self, Stream, StreamExt};
use serde_json::{Value, json};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, info};

use crate::state::AppState;
use pbs_core::{TOOL_NAME, call_tool, tool_descriptor};

/// Logs when the announce stream is dropped, which is when the client
/// disconnects (the stream itself never ends).
struct DisconnectLog;

impl Drop for DisconnectLog {
    fn drop(&mut self) {
        info!("SSE client disconnected");
    }
}

/// Announce the available tools, then hold the connection open until
/// the client goes away.
pub async fn announce() -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
    let tools = json!({ "tools": [tool_descriptor()] });
    let events = stream::iter(vec![
        Ok(Event::default().comment("")),
        Ok(Event::default().event("tools").data(tools.to_string())),
    ]);

    let guard = DisconnectLog;
    let tail = stream::poll_fn(move |_cx| {
        let _keep = &guard;
        Poll::<Option<Result<Event, Infallible>>>::Pending
    });

    Sse::new(events.chain(tail))
}

/// Staged tool invocation over SSE.
pub async fn invoke(
    State(state): State<AppState>,
    Path(tool_name): Path<String>,
    Json(args): Json<Value>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>> + Send + 'static> {
    let (tx, rx) = mpsc::channel::<Event>(8);
    tokio::spawn(run_staged(state, tool_name, args, tx));
    Sse::new(ReceiverStream::new(rx).map(Ok))
}

/// Drive one staged invocation, emitting events in protocol order.
///
/// Send failures mean the client hung up; the forward still runs to
/// completion.
async fn run_staged(state: AppState, tool_name: String, args: Value, tx: mpsc::Sender<Event>) {
    // Initial comment keeps proxies from buffering the stream.
    let _ = tx.send(Event::default().comment("")).await;

    if tool_name != TOOL_NAME {
        let payload = json!({ "error": format!("Unknown tool: {tool_name}") });
        let _ = tx
            .send(Event::default().event("error").data(payload.to_string()))
            .await;
        return;
    }

    let start = json!({ "toolName": &tool_name, "args": &args });
    let _ = tx
        .send(Event::default().event("start").data(start.to_string()))
        .await;

    info!(tool = %tool_name, args = %args, "Invoking tool over SSE");

    match call_tool(&state.client, &tool_name, args).await {
        Ok(output) => {
            let result = serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string());
            let _ = tx.send(Event::default().event("result").data(result)).await;

            let end = json!({ "toolName": &tool_name, "status": "success" });
            let _ = tx
                .send(Event::default().event("end").data(end.to_string()))
                .await;
        }
        Err(err) => {
            error!(error = %err, "Tool invocation failed");
            let payload = json!({ "error": err.to_string() });
            let _ = tx
                .send(Event::default().event("error").data(payload.to_string()))
                .await;
        }
    }
}
