#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
