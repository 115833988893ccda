//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers;
use crate::sse;
use crate::state::{AppState, AxumContext};

/// Permissive CORS, matching the original server's allow-all policy.
fn build_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create the main router with all routes wired to handlers.
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::client_page))
        .route("/health", get(handlers::health))
        .route("/tools", get(handlers::tools))
        .route("/sse", get(sse::announce))
        .route("/sse/{tool_name}", post(sse::invoke))
        .route("/api/{tool_name}", post(handlers::invoke))
        .layer(build_cors_layer())
        .with_state(state)
}
