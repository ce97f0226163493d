//! # Domain Layer
//!
//! Request and configuration models, error types, and the pure text
//! processing (validation, sanitization, reply extraction).
//! This layer is independent of HTTP frameworks and clients.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
