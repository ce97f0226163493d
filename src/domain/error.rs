use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}

/// Rejection reasons for an incoming chat payload.
///
/// The `Display` output is what the HTTP layer returns in the `error` field,
/// so the wording is part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing 'message' field in request")]
    MissingMessage,

    #[error("'message' must be a string")]
    NotAString,

    #[error("'message' cannot be empty")]
    Empty,

    #[error("'message' is too long (max {max} characters)")]
    TooLong { max: usize },
}

/// Categorized failure of a single completion call.
///
/// None of these reach the end user directly: the application layer swaps
/// each one for a fixed apology via [`CompletionError::fallback_message`].
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion request failed: {0}")]
    Transport(String),

    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("no content in message: {0}")]
    MissingContent(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl CompletionError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn unexpected_format(msg: impl Into<String>) -> Self {
        Self::UnexpectedFormat(msg.into())
    }

    pub fn missing_content(msg: impl Into<String>) -> Self {
        Self::MissingContent(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Timeout => "I'm taking longer than expected to respond. Please try again.",
            Self::Transport(_) => {
                "I'm having trouble connecting to my knowledge base. Please try again later."
            }
            Self::UnexpectedFormat(_) => {
                "I apologize, but I received an unexpected response format. Please try again."
            }
            Self::MissingContent(_) => {
                "I received a response but couldn't extract the content. Please try again."
            }
            Self::Unexpected(_) => "I encountered an unexpected error. Please try again.",
        }
    }
}
