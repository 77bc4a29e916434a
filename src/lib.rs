//! Recurrente MCP - payment tools for AI assistants
//!
//! This crate exposes the Recurrente payments API (products, checkouts,
//! customers, subscriptions, coupons) as Model Context Protocol tools, and
//! verifies Recurrente webhook signatures locally.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
