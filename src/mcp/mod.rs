//! MCP (Model Context Protocol) server for kokkai-mcp.
//!
//! Exposes the proceedings search pipeline as three MCP tools.
//!
//! # Architecture
//!
//! ```text
//! MCP Client (assistant host)
//!   ↓ tools/call(name, arguments)
//! KokkaiMcpServer
//!   ↓
//! ToolDispatcher::dispatch()
//!   ├── SearchParameters (serde decode)
//!   ├── query::encode
//!   ├── SearchApi::fetch → SearchEnvelope | ClientError
//!   └── render(envelope, mode) / render_fault(error)
//!   ↓
//! single text content block → MCP Client
//! ```

pub mod server;
pub mod transport;

pub use server::KokkaiMcpServer;
pub use transport::{serve_sse, serve_stdio};
