//! MCP server implementation for kokkai-mcp.
//!
//! Lists the fixed tool catalog and routes `tools/call` into the
//! [`ToolDispatcher`]. Tool failures arrive here already rendered as text;
//! only an unknown tool name becomes an MCP error.
//!
//! Tools are registered by hand rather than with `#[tool_router]`: the three
//! tools share one parameter type but publish different `maximumRecords`
//! bounds, which the macro-derived schema cannot express.

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParams, CallToolResult, Content, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool as McpTool,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer, ServerHandler};
use tracing::info;

use crate::api::{ApiConfig, KokkaiClient};
use crate::error::{ConfigError, DispatchError};
use crate::tools::{Tool, ToolDispatcher};

/// Kokkai MCP server.
///
/// Stateless apart from the shared HTTP client; cloning is cheap.
#[derive(Clone)]
pub struct KokkaiMcpServer {
    dispatcher: ToolDispatcher,
    config: Arc<ApiConfig>,
}

impl KokkaiMcpServer {
    /// Creates a server that queries the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, ConfigError> {
        let client = KokkaiClient::new(&config)?;
        Ok(Self::with_dispatcher(
            ToolDispatcher::new(Arc::new(client)),
            config,
        ))
    }

    /// Creates a server around an existing dispatcher.
    #[must_use]
    pub fn with_dispatcher(dispatcher: ToolDispatcher, config: ApiConfig) -> Self {
        Self {
            dispatcher,
            config: Arc::new(config),
        }
    }

    /// Returns the upstream configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Tool list in MCP form.
    #[must_use]
    pub fn tools() -> Vec<McpTool> {
        Tool::ALL
            .into_iter()
            .map(|tool| McpTool::new(tool.name(), tool.description(), Arc::new(tool.input_schema())))
            .collect()
    }
}

impl ServerHandler for KokkaiMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "kokkai-mcp".to_string(),
                title: Some("Kokkai Proceedings MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: Some("https://kokkai.ndl.go.jp".to_string()),
            },
            instructions: Some(
                "Search the proceedings of the National Diet of Japan. \
                 Use `search_meetings_simple` to find meetings and matching speakers, \
                 `search_meetings_full` for complete speech bodies of a few meetings, and \
                 `search_speeches` for individual speeches. Pass the suggested `startRecord` \
                 to fetch the next page. Cite the speech and meeting URLs in answers."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: Self::tools(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn call_tool(
        &self,
        CallToolRequestParams {
            name, arguments, ..
        }: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        info!(tool = %name, "tool call");

        let text = self
            .dispatcher
            .dispatch(&name, arguments)
            .await
            .map_err(|e: DispatchError| McpError::invalid_params(e.to_string(), None))?;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
