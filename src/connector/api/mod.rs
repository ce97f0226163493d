pub mod container;
pub mod controller;
mod error;
pub mod router;

pub use container::{Container, ContainerConfig};
pub use error::ApiError;
pub use router::{build_router, serve};
