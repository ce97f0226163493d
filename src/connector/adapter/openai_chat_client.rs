use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::{extract_reply, AssistantMessage, CompletionConfig, CompletionError, DomainError};

/// How much of an upstream body is kept in error context.
const BODY_PREVIEW_CHARS: usize = 300;

/// OpenAI chat-completions request payload.
#[derive(Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ApiMessage<'a>; 2],
    max_tokens: u32,
    temperature: f64,
    top_p: f64,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// [`ChatClient`] for any server speaking the OpenAI chat-completions schema
/// (LiteMAAS, vLLM, LM Studio, ...).
///
/// Each call is a single `POST {base_url}/v1/chat/completions` with bearer
/// auth, the mentor system prompt and the user message. No retries; the
/// configured timeout bounds the whole exchange.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    config: CompletionConfig,
    url: String,
}

impl OpenAiChatClient {
    pub fn new(config: CompletionConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;
        let url = config.completions_url();

        Ok(Self {
            client,
            config,
            url,
        })
    }

    /// A request that cannot be built (bad base URL, unencodable key) counts as
    /// a connection problem, like a refused connection.
    fn classify(err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout
        } else {
            CompletionError::transport(err.to_string())
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(
        &self,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        let request = ApiRequest {
            model: self.config.model(),
            messages: [
                ApiMessage {
                    role: "system",
                    content: self.config.system_prompt(),
                },
                ApiMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens,
            temperature: self.config.temperature(),
            top_p: self.config.top_p(),
        };

        debug!("Sending request to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(self.config.api_key())
            .json(&request)
            .send()
            .await
            .map_err(Self::classify)?
            .error_for_status()
            .map_err(Self::classify)?;

        let body = response.text().await.map_err(Self::classify)?;

        let api_response: Value = serde_json::from_str(&body).map_err(|e| {
            CompletionError::transport(format!(
                "failed to parse response: {e}: {}",
                preview(&body)
            ))
        })?;

        let message = first_message(&api_response)?;

        extract_reply(&message).ok_or_else(|| CompletionError::missing_content(format!("{message:?}")))
    }
}

/// Reads `choices[0].message` out of a decoded response.
///
/// A missing, null or non-object step is an unexpected format. A message
/// object whose fields have the wrong type is an unexpected error.
fn first_message(response: &Value) -> Result<AssistantMessage, CompletionError> {
    let message = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .filter(|message| message.is_object())
        .ok_or_else(|| CompletionError::unexpected_format(preview(&response.to_string())))?;

    AssistantMessage::deserialize(message)
        .map_err(|e| CompletionError::unexpected(format!("malformed message {message}: {e}")))
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
