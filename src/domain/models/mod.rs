mod assistant_message;
mod chat_request;
mod completion_config;

pub use assistant_message::*;
pub use chat_request::*;
pub use completion_config::*;
