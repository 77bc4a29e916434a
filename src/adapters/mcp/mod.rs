//! MCP adapter - serves the tool catalog over JSON-RPC on stdio.

pub mod protocol;
mod server;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, SUPPORTED_PROTOCOL_VERSIONS};
pub use server::{McpError, McpServer, SERVER_NAME};
