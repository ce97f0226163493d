use std::sync::Arc;

use tracing::error;

use crate::application::ChatClient;
use crate::domain::{CompletionError, DEFAULT_MAX_TOKENS};

/// Asks the model for a reply and always produces displayable text.
///
/// Failures from the [`ChatClient`] are logged and replaced with the fixed
/// apology for their category.
pub struct GetCompletionUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl GetCompletionUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, user_message: &str, max_tokens: Option<u32>) -> String {
        let max_tokens = max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);

        match self.chat_client.complete(user_message, max_tokens).await {
            Ok(reply) => reply,
            Err(e) => {
                Self::log_failure(&e);
                e.fallback_message().to_string()
            }
        }
    }

    fn log_failure(err: &CompletionError) {
        match err {
            CompletionError::Timeout => error!("Completion request timed out"),
            CompletionError::Transport(detail) => error!("Completion request failed: {detail}"),
            CompletionError::UnexpectedFormat(body) => {
                error!("Unexpected response format: {body}")
            }
            CompletionError::MissingContent(message) => {
                error!("No content in message: {message}")
            }
            CompletionError::Unexpected(detail) => {
                error!("Unexpected error in get_completion: {detail}")
            }
        }
    }
}
