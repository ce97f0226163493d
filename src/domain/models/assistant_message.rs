use serde::{Deserialize, Serialize};

/// The `choices[0].message` object of a chat-completions response.
///
/// Reasoning models may leave `content` empty and put everything in
/// `reasoning_content`, so both are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub reasoning_content: Option<String>,
}
