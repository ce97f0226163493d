//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Chat completions (OpenAI-compatible HTTP client, offline mock)
//! - HTTP API (axum router, controllers, embedded web UI)

pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
