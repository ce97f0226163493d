use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "open-source-mentor-bot";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Default)]
pub struct HealthController;

impl HealthController {
    pub fn new() -> Self {
        Self
    }

    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
