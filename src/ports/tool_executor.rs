//! Tool Executor Port - Interface for executing MCP tools.
//!
//! The MCP server only knows tool names and JSON arguments. An executor owns
//! the catalog and the mapping from each tool onto API calls (or local
//! computation, for webhook verification).
//!
//! # Error split
//!
//! - `ToolNotFound` / `InvalidArguments` are caller mistakes and surface as
//!   JSON-RPC errors
//! - `Api` means the tool ran and the upstream call failed; it surfaces as a
//!   tool result flagged `isError`

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::tools::{ArgumentError, ToolCall, ToolDefinition};
use crate::ports::ApiError;

/// Port for executing named tools.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool and return its structured result.
    async fn execute(&self, call: ToolCall) -> Result<Value, ToolExecutionError>;

    /// Every tool this executor can run, in catalog order.
    fn available_tools(&self) -> Vec<ToolDefinition>;

    /// Check if a tool exists.
    fn has_tool(&self, name: &str) -> bool;
}

/// Errors from tool execution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolExecutionError {
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    #[error("Invalid arguments for tool {tool}: {message}")]
    InvalidArguments { tool: String, message: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ToolExecutionError {
    pub fn invalid_arguments(tool: impl Into<String>, err: ArgumentError) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            message: err.to_string(),
        }
    }

    /// True when the call never reached the tool body.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::ToolNotFound(_) | Self::InvalidArguments { .. })
    }
}
