use async_trait::async_trait;

use crate::domain::CompletionError;

/// Sends one user message to a chat-completions model and returns its reply.
///
/// Implementors own transport and wire-format details and report every
/// failure as a categorized [`CompletionError`]; they never substitute
/// user-facing text themselves.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// `user_message` is expected to be sanitized already.
    async fn complete(&self, user_message: &str, max_tokens: u32)
        -> Result<String, CompletionError>;
}
