pub mod gemini;
pub mod media;
pub mod openai;

/// Failure surface of the provider adapters. The upload handler degrades
/// these into plain text for the normalization pipeline; nothing upstream
/// of the handler ever sees them.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("status {status}: {detail}")]
    Api { status: u16, detail: String },
    #[error("empty reply")]
    EmptyReply,
}

pub(crate) fn redact_api_key(text: &str, key: &str) -> String {
    let key = key.trim();
    if key.is_empty() {
        return text.to_string();
    }
    text.replace(key, "[redacted]")
}

pub(crate) fn truncate_for_log(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }
    let truncated: String = value.chars().take(limit).collect();
    format!("{truncated}... (truncated)")
}

/// Pulls a human-readable message out of a provider error body, plus a
/// bounded summary of the whole body for the log.
pub(crate) fn summarize_error_body(body: &str) -> (Option<String>, String) {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return (None, "empty response body".to_string());
    }

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        let message = value
            .pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(|v| v.to_string())
            .or_else(|| {
                value
                    .get("message")
                    .and_then(|v| v.as_str())
                    .map(|v| v.to_string())
            });
        return (message, truncate_for_log(&value.to_string(), 2000));
    }

    (None, truncate_for_log(trimmed, 2000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redaction_replaces_the_key_everywhere() {
        let redacted = redact_api_key("key sk-123 failed: sk-123", "sk-123");
        assert_eq!(redacted, "key [redacted] failed: [redacted]");
        assert_eq!(redact_api_key("no key configured", ""), "no key configured");
    }

    #[test]
    fn error_bodies_yield_the_embedded_message() {
        let (message, _) = summarize_error_body(r#"{"error": {"message": "quota exceeded"}}"#);
        assert_eq!(message.as_deref(), Some("quota exceeded"));

        let (message, summary) = summarize_error_body("plain text failure");
        assert_eq!(message, None);
        assert_eq!(summary, "plain text failure");
    }
}
