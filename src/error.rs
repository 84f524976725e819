//! Error types for kokkai-mcp.
//!
//! Each layer owns its error enum. Pipeline failures ([`ClientError`],
//! [`ToolError`]) are rendered into tool text by the dispatcher; only
//! [`DispatchError`] escapes to the protocol layer.

use thiserror::Error;

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A tool call could not be routed.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// A CLI command failed.
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Failure talking to the upstream search API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (DNS, connect, reset,
    /// timeout) or the body could not be read.
    #[error("request failed: {message}")]
    Transport {
        /// Underlying transport error message.
        message: String,
    },

    /// The upstream answered with a non-2xx status.
    #[error("API request failed: {code} {status_text}")]
    HttpStatus {
        /// HTTP status code.
        code: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
    },

    /// A 2xx response whose body is not a decodable search envelope.
    #[error("malformed response body: {message}")]
    MalformedBody {
        /// Decoder error message.
        message: String,
    },
}

/// Failure inside a single tool invocation.
///
/// These never reach the MCP host as protocol errors; the dispatcher turns
/// them into rendered text.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool arguments did not match the parameter schema.
    #[error("invalid arguments: {message}")]
    InvalidArguments {
        /// Deserializer error message.
        message: String,
    },

    /// Upstream call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Failure routing a tool call.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The tool name is not in the catalog.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name.
        name: String,
    },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {message}")]
    HttpClient {
        /// Builder error message.
        message: String,
    },
}

/// CLI command errors.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Command arguments were rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Command execution failed.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}
