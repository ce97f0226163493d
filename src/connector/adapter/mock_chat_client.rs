use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ChatClient;
use crate::domain::CompletionError;

enum Behaviour {
    Echo,
    Reply(String),
    Fail(fn() -> CompletionError),
}

/// Offline [`ChatClient`] for local runs and tests.
///
/// Records every call so tests can assert on what reached the model.
pub struct MockChatClient {
    behaviour: Behaviour,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockChatClient {
    /// Replies by echoing the (sanitized) user message.
    pub fn new() -> Self {
        Self::with_behaviour(Behaviour::Echo)
    }

    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Reply(reply.into()))
    }

    pub fn failing(error: fn() -> CompletionError) -> Self {
        Self::with_behaviour(Behaviour::Fail(error))
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_messages(&self) -> Vec<String> {
        self.calls().into_iter().map(|(message, _)| message).collect()
    }

    pub fn seen_max_tokens(&self) -> Vec<u32> {
        self.calls().into_iter().map(|(_, tokens)| tokens).collect()
    }

    fn calls(&self) -> Vec<(String, u32)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        user_message: &str,
        max_tokens: u32,
    ) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((user_message.to_string(), max_tokens));

        debug!("Mock completion for {} chars", user_message.chars().count());

        match &self.behaviour {
            Behaviour::Echo => Ok(format!("(mock) You said: {user_message}")),
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Fail(error) => Err(error()),
        }
    }
}
