//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `ApiClient` - Authenticated requests to the Recurrente REST API
//! - `ToolExecutor` - Runs a named tool with JSON arguments

mod api_client;
mod tool_executor;

pub use api_client::{ApiClient, ApiError, ApiRequest, HttpMethod};
pub use tool_executor::{ToolExecutionError, ToolExecutor};
