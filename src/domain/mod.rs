//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `webhook` - Webhook signature verification (pure, no I/O)
//! - `tools` - Tool catalog, argument types and schemas

pub mod tools;
pub mod webhook;
