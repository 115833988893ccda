#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod protocol;
pub mod server;

pub use server::McpServer;
