mod chat;
mod get_completion;

pub use chat::*;
pub use get_completion::*;
