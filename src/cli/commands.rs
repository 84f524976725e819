//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use std::fmt::Write as FmtWrite;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::api::{ApiConfig, KokkaiClient};
use crate::cli::parser::{Cli, Commands, McpCommands, OutputFormat};
use crate::error::{CommandError, Result};
use crate::mcp::{KokkaiMcpServer, serve_sse, serve_stdio};
use crate::tools::{ToolDispatcher, definitions};

/// Executes the parsed command and returns its output.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the tool name is unknown,
/// or the MCP server fails.
pub fn execute(cli: &Cli) -> Result<String> {
    match &cli.command {
        Commands::Tools => cmd_tools(cli.format),
        Commands::Call { tool, args } => {
            cmd_call(&resolve_config(cli)?, tool, args.as_deref(), cli.format)
        }
        Commands::Mcp(sub) => cmd_mcp(sub, resolve_config(cli)?),
    }
}

/// Merges CLI flags over environment and defaults.
fn resolve_config(cli: &Cli) -> Result<ApiConfig> {
    let mut builder = ApiConfig::builder();
    if let Some(url) = &cli.base_url {
        builder = builder.base_url(url.clone());
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.from_env().build()?)
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new().map_err(|e| {
        CommandError::ExecutionFailed(format!("Failed to create async runtime: {e}")).into()
    })
}

/// Lists tool definitions.
fn cmd_tools(format: OutputFormat) -> Result<String> {
    let defs = definitions();
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&defs).map_err(|e| {
            CommandError::ExecutionFailed(format!("Serialization error: {e}")).into()
        }),
        OutputFormat::Text => {
            let mut output = String::new();
            for def in &defs {
                let _ = writeln!(output, "{}", def.name);
                let _ = writeln!(output, "  {}", def.description);
            }
            Ok(output)
        }
    }
}

/// Parses `--args` into an argument object.
fn parse_arguments(raw: Option<&str>) -> Result<Option<Map<String, Value>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(Some(map)),
        Ok(_) => Err(CommandError::InvalidArgument("--args must be a JSON object".to_string()).into()),
        Err(e) => Err(CommandError::InvalidArgument(format!("--args is not valid JSON: {e}")).into()),
    }
}

/// Runs one tool call against the upstream.
fn cmd_call(config: &ApiConfig, tool: &str, args: Option<&str>, format: OutputFormat) -> Result<String> {
    let arguments = parse_arguments(args)?;
    let client = KokkaiClient::new(config)?;
    let dispatcher = ToolDispatcher::new(Arc::new(client));

    let text = runtime()?.block_on(dispatcher.dispatch(tool, arguments))?;

    match format {
        OutputFormat::Text => Ok(text),
        OutputFormat::Json => serde_json::to_string_pretty(&serde_json::json!({
            "tool": tool,
            "text": text,
        }))
        .map_err(|e| CommandError::ExecutionFailed(format!("Serialization error: {e}")).into()),
    }
}

/// Starts the MCP server.
///
/// Blocks until the client disconnects (stdio) or the server is stopped (SSE).
fn cmd_mcp(cmd: &McpCommands, config: ApiConfig) -> Result<String> {
    let server = KokkaiMcpServer::new(config)?;

    runtime()?
        .block_on(async {
            match cmd {
                McpCommands::Stdio => serve_stdio(server).await,
                McpCommands::Sse { host, port } => serve_sse(server, host, *port).await,
            }
        })
        .map_err(|e| CommandError::ExecutionFailed(format!("MCP server error: {e}")))?;

    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;

    #[test]
    fn test_tools_text_lists_all() {
        let output = cmd_tools(OutputFormat::Text).unwrap_or_else(|e| panic!("tools: {e}"));
        assert!(output.contains("search_meetings_simple"));
        assert!(output.contains("search_meetings_full"));
        assert!(output.contains("search_speeches"));
    }

    #[test]
    fn test_tools_json_parses() {
        let output = cmd_tools(OutputFormat::Json).unwrap_or_else(|e| panic!("tools: {e}"));
        let value: Value = serde_json::from_str(&output).unwrap_or_else(|e| panic!("json: {e}"));
        assert_eq!(value.as_array().map(Vec::len), Some(3));
    }

    #[test]
    fn test_parse_arguments() {
        assert!(matches!(parse_arguments(None), Ok(None)));
        let map = parse_arguments(Some(r#"{"any":"防衛"}"#))
            .unwrap_or_else(|e| panic!("args: {e}"))
            .unwrap_or_default();
        assert_eq!(map.get("any"), Some(&Value::String("防衛".to_string())));
        assert!(matches!(
            parse_arguments(Some("[1,2]")),
            Err(Error::Command(CommandError::InvalidArgument(_)))
        ));
        assert!(parse_arguments(Some("{not json")).is_err());
    }

    #[test]
    fn test_unknown_tool_fails_before_network() {
        let cli = Cli::try_parse_from([
            "kokkai-mcp",
            "--base-url",
            "http://127.0.0.1:9",
            "call",
            "search_bills",
        ])
        .unwrap_or_else(|e| panic!("parse: {e}"));
        let result = execute(&cli);
        assert!(matches!(result, Err(Error::Dispatch(_))));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let cli = Cli::try_parse_from(["kokkai-mcp", "--base-url", "ftp://x", "call", "search_speeches"])
            .unwrap_or_else(|e| panic!("parse: {e}"));
        assert!(matches!(execute(&cli), Err(Error::Config(_))));
    }
}
