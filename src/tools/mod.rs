//! Tool catalog and dispatch.

pub mod catalog;
pub mod dispatcher;

pub use catalog::{Tool, ToolDefinition, definitions};
pub use dispatcher::ToolDispatcher;
