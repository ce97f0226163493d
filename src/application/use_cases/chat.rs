use serde_json::Value;
use tracing::info;

use crate::domain::{
    sanitize_input, validate_chat_request, ChatReply, ChatRequest, ValidationError,
};

use super::GetCompletionUseCase;

const LOG_PREVIEW_CHARS: usize = 50;

/// Full request path for one chat turn: validate, sanitize, ask the model.
pub struct ChatUseCase {
    completion: GetCompletionUseCase,
    max_tokens: Option<u32>,
}

impl ChatUseCase {
    pub fn new(completion: GetCompletionUseCase) -> Self {
        Self {
            completion,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Handle a decoded request body. Only validation can fail.
    pub async fn execute(&self, body: &Value) -> Result<ChatReply, ValidationError> {
        let request = validate_chat_request(body)?;
        Ok(self.reply_to(request).await)
    }

    pub async fn reply_to(&self, request: ChatRequest) -> ChatReply {
        let user_message = sanitize_input(request.message());
        info!("Received message: {}...", preview(&user_message));

        let response = self
            .completion
            .execute(&user_message, self.max_tokens)
            .await;
        info!("Generated response: {}...", preview(&response));

        ChatReply::success(response)
    }
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
