//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `recurrente` - Recurrente REST API clients (HTTP, mock)
//! - `mcp` - Model Context Protocol server over stdio

pub mod mcp;
pub mod recurrente;

pub use mcp::McpServer;
pub use recurrente::{HttpApiClient, MockApiClient, RecurrenteConfig};
