//! CLI layer for kokkai-mcp.
//!
//! Provides the command-line interface using clap, with commands for
//! serving MCP and for calling the search tools directly.

pub mod commands;
pub mod parser;

pub use commands::execute;
pub use parser::{Cli, Commands, McpCommands, OutputFormat};
