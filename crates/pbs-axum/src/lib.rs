#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod sse;
pub mod state;

pub use bootstrap::{DEFAULT_PORT, ServerConfig, bootstrap, start_server};
pub use routes::create_router;
pub use state::{AppState, AxumContext};
