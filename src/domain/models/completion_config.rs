use std::time::Duration;

use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://lite-maas.example/api";
pub const DEFAULT_API_KEY: &str = "changeme";
pub const DEFAULT_MODEL: &str = "Granite-3.3-8B-Instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 1500;
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TOP_P: f64 = 0.9;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Persona prepended to every conversation as the `system` message.
pub const MENTOR_SYSTEM_PROMPT: &str = "\
You are a friendly Open Source Mentor Bot for a Red Hat hackathon.

Your role:
- Help participants learn about open source contribution
- Explain Red Hat values: Open Collaboration, Transparency, Community First, Automation, Trust
- Guide users on containerization with Podman/Docker
- Share community best practices

Be warm, encouraging, and concise. For greetings, introduce yourself briefly.
";

/// Settings for the remote chat-completions endpoint.
///
/// Built once at startup and shared read-only by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionConfig {
    base_url: String,
    api_key: String,
    model: String,
    system_prompt: String,
    temperature: f64,
    top_p: f64,
    max_tokens: u32,
    timeout: Duration,
}

impl CompletionConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: MENTOR_SYSTEM_PROMPT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the endpoint settings from the process environment:
    ///
    /// | Variable            | Default                         |
    /// |---------------------|---------------------------------|
    /// | `LITEMAAS_BASE_URL` | `https://lite-maas.example/api` |
    /// | `LITEMAAS_API_KEY`  | `changeme`                      |
    /// | `LITEMAAS_MODEL`    | `Granite-3.3-8B-Instruct`       |
    pub fn from_env() -> Result<Self, DomainError> {
        let base = std::env::var("LITEMAAS_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let key = std::env::var("LITEMAAS_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        let model =
            std::env::var("LITEMAAS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        if base.trim().is_empty() {
            return Err(DomainError::configuration("LITEMAAS_BASE_URL is empty"));
        }

        Ok(Self::new(base, key).with_model(model))
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn top_p(&self) -> f64 {
        self.top_p
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn completions_url(&self) -> String {
        format!("{}{}", self.base_url, COMPLETIONS_PATH)
    }
}
