//! HTTP-specific error types and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use pbs_core::ToolCallError;

/// HTTP adapter error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Unknown tool name on an invocation route.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Request body did not deserialize into tool arguments.
    #[error("Invalid arguments: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("{0}")]
    Internal(String),
}

/// JSON error body: `{"error": "<message>"}`.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnknownTool(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}

impl From<ToolCallError> for HttpError {
    fn from(err: ToolCallError) -> Self {
        match err {
            ToolCallError::UnknownTool(name) => Self::UnknownTool(name),
            ToolCallError::InvalidArguments(e) => Self::BadRequest(e.to_string()),
        }
    }
}
