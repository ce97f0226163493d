use crate::domain::AssistantMessage;

/// Budget (in characters) for the trailing paragraphs kept from a reasoning trace.
pub const CONCLUSION_BUDGET_CHARS: usize = 600;
/// Cap applied when even the final paragraph alone exceeds the budget.
pub const LAST_PARAGRAPH_CHARS: usize = 500;

const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Pick the display text out of an assistant message.
///
/// A non-empty `content` always wins. Otherwise the conclusion is recovered
/// from `reasoning_content`. Returns `None` when neither field has text.
pub fn extract_reply(message: &AssistantMessage) -> Option<String> {
    if let Some(content) = message.content.as_deref().filter(|c| !c.is_empty()) {
        return Some(content.to_string());
    }

    message
        .reasoning_content
        .as_deref()
        .filter(|r| !r.is_empty())
        .map(conclude_reasoning)
}

/// Reduce a reasoning trace to its closing statements.
///
/// Reasoning models put their conclusion at the end, so paragraphs are taken
/// from the back while their combined length (separators not counted) stays
/// within [`CONCLUSION_BUDGET_CHARS`]. The thresholds are fixed; callers and
/// tests depend on them.
pub fn conclude_reasoning(reasoning: &str) -> String {
    let paragraphs: Vec<&str> = reasoning
        .split(PARAGRAPH_SEPARATOR)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let Some(last) = paragraphs.last() else {
        // Whitespace-only trace: nothing to split, return a bounded chunk as-is.
        return take_chars(reasoning, CONCLUSION_BUDGET_CHARS);
    };

    let mut total = 0;
    let mut kept = 0;
    for paragraph in paragraphs.iter().rev() {
        let len = paragraph.chars().count();
        if total + len > CONCLUSION_BUDGET_CHARS {
            break;
        }
        total += len;
        kept += 1;
    }

    if kept > 0 {
        return paragraphs[paragraphs.len() - kept..].join(PARAGRAPH_SEPARATOR);
    }

    if last.chars().count() > LAST_PARAGRAPH_CHARS {
        format!("{}...", take_chars(last, LAST_PARAGRAPH_CHARS))
    } else {
        last.to_string()
    }
}

fn take_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_is_preferred_over_reasoning() {
        let message = AssistantMessage {
            content: Some("Final answer".to_string()),
            reasoning_content: Some("Let me think...".to_string()),
        };
        assert_eq!(extract_reply(&message).as_deref(), Some("Final answer"));
    }

    #[test]
    fn empty_content_falls_back_to_reasoning() {
        let message = AssistantMessage {
            content: Some(String::new()),
            reasoning_content: Some("Thinking.\n\nSo the answer is 4.".to_string()),
        };
        assert_eq!(
            extract_reply(&message).as_deref(),
            Some("Thinking.\n\nSo the answer is 4.")
        );
    }

    #[test]
    fn nothing_to_extract() {
        assert_eq!(extract_reply(&AssistantMessage::default()), None);

        let message = AssistantMessage {
            content: Some(String::new()),
            reasoning_content: Some(String::new()),
        };
        assert_eq!(extract_reply(&message), None);
    }

    #[test]
    fn keeps_only_trailing_paragraphs_within_budget() {
        let first = "a".repeat(400);
        let second = "b".repeat(300);
        let third = "c".repeat(250);
        let trace = format!("{first}\n\n{second}\n\n{third}");

        let reply = conclude_reasoning(&trace);

        assert_eq!(reply, format!("{second}\n\n{third}"));
        assert!(!reply.contains('a'));
    }

    #[test]
    fn budget_boundary_is_inclusive() {
        let head = "x".repeat(10);
        let tail = "y".repeat(600);
        let reply = conclude_reasoning(&format!("{head}\n\n{tail}"));
        assert_eq!(reply, tail);
    }

    #[test]
    fn paragraphs_are_trimmed_and_blank_ones_dropped() {
        let trace = "  step one  \n\n\n\n   \n\n  conclusion  ";
        assert_eq!(conclude_reasoning(trace), "step one\n\nconclusion");
    }

    #[test]
    fn oversized_last_paragraph_is_truncated() {
        let trace = format!("short\n\n{}", "z".repeat(700));
        let reply = conclude_reasoning(&trace);
        assert_eq!(reply, format!("{}...", "z".repeat(500)));
    }

    #[test]
    fn neighbour_over_budget_is_dropped() {
        // 550 fits the per-paragraph cap but not alongside a 100-char neighbour.
        let tail = "q".repeat(550);
        let trace = format!("{}\n\n{tail}", "p".repeat(100));
        assert_eq!(conclude_reasoning(&trace), tail);
    }

    #[test]
    fn single_long_paragraph_without_breaks() {
        let trace = "w".repeat(650);
        assert_eq!(conclude_reasoning(&trace), format!("{}...", "w".repeat(500)));
    }

    #[test]
    fn whitespace_only_trace_returns_raw_prefix() {
        let trace = " ".repeat(700);
        assert_eq!(conclude_reasoning(&trace), " ".repeat(600));
    }
}
