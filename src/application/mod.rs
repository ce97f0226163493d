//! # Application Layer
//!
//! Use cases coordinating domain logic with the remote completion model.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
