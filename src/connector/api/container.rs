use std::sync::Arc;

use tracing::debug;

use crate::application::{ChatClient, ChatUseCase, GetCompletionUseCase};
use crate::connector::{MockChatClient, OpenAiChatClient};
use crate::domain::{CompletionConfig, DomainError};

pub struct ContainerConfig {
    pub completion: CompletionConfig,
    /// Answer from [`MockChatClient`] instead of calling the remote model.
    pub mock_completions: bool,
}

/// Wires the chat client into the use cases. Built once at startup and
/// shared read-only by every request handler.
pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    max_tokens: u32,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self, DomainError> {
        let max_tokens = config.completion.max_tokens();

        let chat_client: Arc<dyn ChatClient> = if config.mock_completions {
            debug!("Using mock chat client");
            Arc::new(MockChatClient::new())
        } else {
            debug!(
                "Using chat-completions endpoint at {} (model {})",
                config.completion.base_url(),
                config.completion.model()
            );
            Arc::new(OpenAiChatClient::new(config.completion)?)
        };

        Ok(Self {
            chat_client,
            max_tokens,
        })
    }

    /// Build around an existing client, e.g. a test double.
    pub fn with_chat_client(chat_client: Arc<dyn ChatClient>) -> Self {
        Self {
            chat_client,
            max_tokens: crate::domain::DEFAULT_MAX_TOKENS,
        }
    }

    pub fn completion_use_case(&self) -> GetCompletionUseCase {
        GetCompletionUseCase::new(self.chat_client.clone())
    }

    pub fn chat_use_case(&self) -> ChatUseCase {
        ChatUseCase::new(self.completion_use_case()).with_max_tokens(self.max_tokens)
    }
}
