//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand, ValueEnum};

/// kokkai-mcp: Diet proceedings search for AI assistants.
///
/// Runs an MCP server that exposes the National Diet Library proceedings
/// search API as tools, or calls those tools directly from the shell.
#[derive(Parser, Debug)]
#[command(name = "kokkai-mcp")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the proceedings search API.
    ///
    /// Defaults to `https://kokkai.ndl.go.jp/api`.
    #[arg(long, env = "KOKKAI_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds.
    #[arg(long, env = "KOKKAI_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format for `tools` and `call`.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text.
    Text,
    /// JSON.
    Json,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start MCP (Model Context Protocol) server.
    #[command(subcommand)]
    Mcp(McpCommands),

    /// List the tools and their parameter schemas.
    #[command(after_help = r#"Examples:
  kokkai-mcp tools                    # Names and descriptions
  kokkai-mcp --format json tools      # Full definitions with JSON Schema
"#)]
    Tools,

    /// Call a tool once and print the rendered result.
    #[command(after_help = r#"Examples:
  kokkai-mcp call search_meetings_simple --args '{"any":"科学技術","nameOfHouse":"衆議院","maximumRecords":10}'
  kokkai-mcp call search_speeches --args '{"speaker":"岸田文雄","from":"2023-01-01"}'
  kokkai-mcp call search_meetings_full --args '{"issueID":"121305254X00120230201"}'
"#)]
    Call {
        /// Tool name.
        tool: String,

        /// Tool arguments as a JSON object.
        #[arg(short, long)]
        args: Option<String>,
    },
}

/// MCP transport subcommands.
#[derive(Subcommand, Debug)]
pub enum McpCommands {
    /// Start MCP server with stdio transport.
    ///
    /// Reads JSON-RPC messages from stdin, writes responses to stdout.
    #[command(after_help = r#"Examples:
  kokkai-mcp mcp stdio                                       # Start stdio MCP server
  KOKKAI_API_BASE_URL=http://localhost:8080/api kokkai-mcp mcp stdio
"#)]
    Stdio,

    /// Start MCP server with SSE/HTTP transport.
    ///
    /// Listens for incoming HTTP connections using streamable HTTP transport.
    #[command(after_help = r#"Examples:
  kokkai-mcp mcp sse                            # Listen on 127.0.0.1:3000
  kokkai-mcp mcp sse --host 0.0.0.0 --port 8080
"#)]
    Sse {
        /// Host to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to.
        #[arg(long, default_value = "3000")]
        port: u16,
    },
}
