//! # kokkai-mcp
//!
//! MCP server for the National Diet Library proceedings search API
//! (<https://kokkai.ndl.go.jp>).
//!
//! Three tools translate structured search parameters into upstream
//! queries and render the results as bounded text for an assistant host:
//!
//! - `search_meetings_simple`: meetings with the list of matching speeches
//! - `search_meetings_full`: meetings with full speech bodies
//! - `search_speeches`: individual speeches with meeting context
//!
//! ## Pipeline
//!
//! ```text
//! (tool name, arguments)
//!   → tools::ToolDispatcher
//!   → api::query::encode
//!   → api::SearchApi::fetch
//!   → render::render
//!   → text
//! ```

pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod mcp;
pub mod render;
pub mod tools;

pub use crate::api::{ApiConfig, Endpoint, KokkaiClient, SearchApi};
pub use crate::core::{SearchEnvelope, SearchParameters};
pub use crate::error::{ClientError, CommandError, ConfigError, DispatchError, Error, Result, ToolError};
pub use crate::mcp::KokkaiMcpServer;
pub use crate::render::{RenderMode, render};
pub use crate::tools::{Tool, ToolDispatcher};
