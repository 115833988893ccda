#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod config;
pub mod endpoints;
pub mod envelope;
pub mod forward;
pub mod request;
pub mod tool;

// Re-export the types adapters work with day to day
pub use config::ApiConfig;
pub use envelope::{Envelope, ErrorEnvelope, RateLimit, ResultEnvelope, ToolOutput};
pub use forward::PbsClient;
pub use request::{DEFAULT_TIMEOUT_MS, ForwardRequest, Method};
pub use tool::{TOOL_NAME, ToolCallError, ToolDescriptor, call_tool, tool_descriptor};
