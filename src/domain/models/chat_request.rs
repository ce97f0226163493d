use serde::{Deserialize, Serialize};

/// Longest raw message (in characters) accepted from a client.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// A chat message that has passed validation.
///
/// Only [`crate::domain::validate_chat_request`] builds one from untrusted
/// input, so holding a `ChatRequest` means the text is a non-blank string of at
/// most [`MAX_MESSAGE_CHARS`] characters. The text is still raw; it has not
/// been sanitized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    message: String,
}

impl ChatRequest {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Successful body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub status: String,
}

impl ChatReply {
    pub fn success(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            status: "success".to_string(),
        }
    }
}
