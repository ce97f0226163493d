use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;
use serde_json::Value;
use tracing::error;

use crate::domain::ChatReply;

use super::super::{ApiError, Container};

pub struct ChatController<'a> {
    container: &'a Container,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Handle a raw `POST /api/chat` body.
    ///
    /// A panic anywhere below this point is logged and reported as a 500.
    pub async fn chat(&self, body: &[u8]) -> Result<ChatReply, ApiError> {
        match AssertUnwindSafe(self.process(body)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                error!("Error in chat endpoint: {}", panic_message(panic.as_ref()));
                Err(ApiError::Internal)
            }
        }
    }

    async fn process(&self, body: &[u8]) -> Result<ChatReply, ApiError> {
        let payload: Value = serde_json::from_slice(body).map_err(|_| ApiError::invalid_json())?;

        if is_blank_json(&payload) {
            return Err(ApiError::invalid_json());
        }

        let use_case = self.container.chat_use_case();
        Ok(use_case.execute(&payload).await?)
    }
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` carry no request at all.
fn is_blank_json(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn blank_json_values() {
        for value in [json!(null), json!(false), json!(0), json!(""), json!([]), json!({})] {
            assert!(is_blank_json(&value), "{value}");
        }
        for value in [json!(true), json!(1), json!("x"), json!([0]), json!({"a": 1})] {
            assert!(!is_blank_json(&value), "{value}");
        }
    }

    #[test]
    fn panic_payloads_are_readable() {
        let owned: Box<dyn Any + Send> = Box::new(String::from("owned"));
        let borrowed: Box<dyn Any + Send> = Box::new("borrowed");
        let other: Box<dyn Any + Send> = Box::new(7_u8);

        assert_eq!(panic_message(owned.as_ref()), "owned");
        assert_eq!(panic_message(borrowed.as_ref()), "borrowed");
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
