//! Tool catalog - the tools exposed to MCP clients.
//!
//! ## Key Types
//!
//! - [`ToolDefinition`] - Name, description and input schema for a tool
//! - [`ToolCall`] - Request to invoke a tool
//! - [`ToolRegistry`] - Ordered catalog with name lookup
//! - [`ToolArguments`] - Typed, validated arguments for one tool
//!
//! Per-resource argument types and schemas live in [`definitions`].

mod arguments;
pub mod definitions;
mod tool_call;
mod tool_definition;
mod tool_registry;

pub use arguments::{
    parse_arguments, require_min_items, require_non_empty, require_resource_id, ArgumentError,
    ToolArguments,
};
pub use tool_call::ToolCall;
pub use tool_definition::ToolDefinition;
pub use tool_registry::ToolRegistry;
