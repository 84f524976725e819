//! Transports for the kokkai MCP server.
//!
//! `stdio` is what desktop hosts spawn; streamable HTTP serves several
//! remote sessions from one process, all sharing the upstream client.

use rmcp::ServiceExt;
use rmcp::transport::io::stdio;
use tracing::info;

use super::server::KokkaiMcpServer;

/// Serves MCP over stdin/stdout until the host closes the stream.
///
/// # Errors
///
/// Returns an error if the handshake fails or the session ends abnormally.
pub async fn serve_stdio(server: KokkaiMcpServer) -> anyhow::Result<()> {
    info!(base_url = %server.config().base_url, "kokkai MCP server running on stdio");
    let service = server.serve(stdio()).await?;
    service.waiting().await?;
    Ok(())
}

/// Serves MCP over streamable HTTP at `http://{host}:{port}/mcp`.
///
/// Stops on Ctrl-C. The subcommand keeps the `sse` name although the
/// transport is streamable HTTP.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the listener fails.
pub async fn serve_sse(server: KokkaiMcpServer, host: &str, port: u16) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::{
        StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
    };
    use std::sync::Arc;

    let shutdown = tokio_util::sync::CancellationToken::new();

    // Sessions share the server's dispatcher and HTTP client
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        Arc::new(LocalSessionManager::default()),
        StreamableHttpServerConfig {
            cancellation_token: shutdown.child_token(),
            ..Default::default()
        },
    );

    let router = axum::Router::new().nest_service("/mcp", service);
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("kokkai MCP server listening on http://{addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            shutdown.cancel();
        })
        .await?;

    Ok(())
}
