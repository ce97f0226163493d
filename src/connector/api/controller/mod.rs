pub mod chat_controller;
pub mod health_controller;
pub mod index_controller;

pub use chat_controller::ChatController;
pub use health_controller::{HealthController, HealthStatus, SERVICE_NAME};
pub use index_controller::IndexController;
