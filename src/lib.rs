// src/lib.rs
// Holocron - Star Wars catalog and favorites over MCP

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod mcp;
pub mod store;
pub mod workflows;

pub use error::{HolocronError, Result};
