use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::domain::{ChatRequest, ValidationError, MAX_MESSAGE_CHARS};

/// A single lowercase DNS label: 1-63 chars, alphanumerics and inner hyphens.
static SUBDOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("subdomain pattern is valid")
});

/// Check a decoded request body and extract the chat message.
///
/// Checks run in order and stop at the first failure: the `message` key must
/// exist, hold a string, be non-blank once trimmed, and be at most
/// [`MAX_MESSAGE_CHARS`] characters long (measured before trimming).
pub fn validate_chat_request(body: &Value) -> Result<ChatRequest, ValidationError> {
    let message = body
        .get("message")
        .ok_or(ValidationError::MissingMessage)?;

    let message = message.as_str().ok_or(ValidationError::NotAString)?;

    if message.trim().is_empty() {
        return Err(ValidationError::Empty);
    }

    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ValidationError::TooLong {
            max: MAX_MESSAGE_CHARS,
        });
    }

    Ok(ChatRequest::new(message))
}

pub fn is_valid_subdomain(subdomain: &str) -> bool {
    SUBDOMAIN_PATTERN.is_match(subdomain)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_plain_message() {
        let request = validate_chat_request(&json!({"message": "Hello"})).unwrap();
        assert_eq!(request.message(), "Hello");
    }

    #[test]
    fn missing_message_is_reported_first() {
        let err = validate_chat_request(&json!({})).unwrap_err();
        assert!(err.to_string().contains("Missing 'message'"));

        let err = validate_chat_request(&json!({"msg": 42})).unwrap_err();
        assert_eq!(err, ValidationError::MissingMessage);
    }

    #[test]
    fn non_object_body_has_no_message() {
        let err = validate_chat_request(&json!(["message"])).unwrap_err();
        assert_eq!(err, ValidationError::MissingMessage);
    }

    #[test]
    fn rejects_non_string_values() {
        for value in [json!(123), json!(null), json!(true), json!(["hi"]), json!({"a": 1})] {
            let err = validate_chat_request(&json!({ "message": value })).unwrap_err();
            assert!(err.to_string().contains("must be a string"), "{value}");
        }
    }

    #[test]
    fn rejects_blank_message() {
        let err = validate_chat_request(&json!({"message": "   \n\t"})).unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn length_limit_counts_characters() {
        let at_limit = "a".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_chat_request(&json!({ "message": at_limit })).is_ok());

        let over = "a".repeat(MAX_MESSAGE_CHARS + 1);
        let err = validate_chat_request(&json!({ "message": over })).unwrap_err();
        assert!(err.to_string().contains("too long"));

        // 1000 multi-byte characters are still within the limit.
        let accented = "é".repeat(MAX_MESSAGE_CHARS);
        assert!(validate_chat_request(&json!({ "message": accented })).is_ok());
    }

    #[test]
    fn length_is_checked_before_trimming() {
        let padded = format!("hi{}", " ".repeat(MAX_MESSAGE_CHARS));
        let err = validate_chat_request(&json!({ "message": padded })).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));
    }

    #[test]
    fn valid_subdomains() {
        assert!(is_valid_subdomain("team1"));
        assert!(is_valid_subdomain("rlteam"));
        assert!(is_valid_subdomain("test-team"));
        assert!(is_valid_subdomain("a"));
        assert!(is_valid_subdomain(&"a".repeat(63)));
    }

    #[test]
    fn invalid_subdomains() {
        assert!(!is_valid_subdomain("Team1"));
        assert!(!is_valid_subdomain("-team"));
        assert!(!is_valid_subdomain("team-"));
        assert!(!is_valid_subdomain("team_1"));
        assert!(!is_valid_subdomain(""));
        assert!(!is_valid_subdomain(&"a".repeat(64)));
    }
}
