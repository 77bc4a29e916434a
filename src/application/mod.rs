//! Application layer - handlers and the tool executor.
//!
//! Handlers turn typed tool arguments into API requests. The executor owns
//! the tool catalog and routes each `ToolCall` to the right handler.

pub mod executor;
pub mod handlers;

pub use executor::RecurrenteToolExecutor;
