pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use cli::Commands;

pub use application::{ChatClient, ChatUseCase, GetCompletionUseCase};

pub use connector::{
    build_router, serve, ApiError, Container, ContainerConfig, MockChatClient, OpenAiChatClient,
};

pub use domain::{
    conclude_reasoning, extract_reply, is_valid_subdomain, sanitize_input, validate_chat_request,
    AssistantMessage, ChatReply, ChatRequest, CompletionConfig, CompletionError, DomainError,
    ValidationError,
};
