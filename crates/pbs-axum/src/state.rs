//! Shared application state type.

use std::sync::Arc;

use pbs_core::PbsClient;

/// Context shared by every handler.
///
/// Holds only the forwarding client; there is no cross-request cache or
/// counter, so concurrent connections stay independent.
#[derive(Debug)]
pub struct AxumContext {
    /// Client for the upstream PBS API.
    pub client: PbsClient,
}

/// Application state shared across all handlers.
pub type AppState = Arc<AxumContext>;
