use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::llm::media::detect_mime_type;
use crate::llm::{redact_api_key, summarize_error_body, ProviderError};
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

fn build_message_content(prompt: &str, image_bytes: &[u8]) -> Value {
    let mime_type = detect_mime_type(image_bytes).unwrap_or_else(|| "image/jpeg".to_string());
    let encoded = general_purpose::STANDARD.encode(image_bytes);
    let data_url = format!("data:{};base64,{}", mime_type, encoded);

    json!([
        { "type": "text", "text": prompt },
        { "type": "image_url", "image_url": { "url": data_url } }
    ])
}

async fn call_chat_completions(payload: &Value) -> Result<Value, ProviderError> {
    debug!(
        target: "llm.openai",
        "OpenAI request: model={}, max_tokens={}",
        payload.get("model").and_then(|v| v.as_str()).unwrap_or("unknown"),
        payload.get("max_tokens").and_then(|v| v.as_i64()).unwrap_or(0)
    );

    let client = get_http_client();
    let response = client
        .post(format!(
            "{}/chat/completions",
            CONFIG.openai_base_url.trim_end_matches('/')
        ))
        .header("Authorization", format!("Bearer {}", CONFIG.openai_api_key))
        .timeout(Duration::from_secs(CONFIG.provider_timeout_seconds))
        .json(payload)
        .send()
        .await
        .map_err(|err| {
            let err_text = redact_api_key(&err.to_string(), &CONFIG.openai_api_key);
            warn!(
                "OpenAI request failed to send: {} (timeout={}, connect={})",
                err_text,
                err.is_timeout(),
                err.is_connect()
            );
            ProviderError::Request(err_text)
        })?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, body_summary) = summarize_error_body(&body);
        warn!("OpenAI API error: status={}, body={}", status, body_summary);
        return Err(ProviderError::Api {
            status: status.as_u16(),
            detail: message.unwrap_or(body_summary),
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|err| ProviderError::Request(err.to_string()))
}

fn extract_content(response: &Value) -> Result<String, ProviderError> {
    let content = response
        .pointer("/choices/0/message/content")
        .and_then(|value| value.as_str())
        .unwrap_or("")
        .trim()
        .to_string();

    if content.is_empty() {
        warn!("OpenAI response had no message content");
        return Err(ProviderError::EmptyReply);
    }
    Ok(content)
}

/// Sends the photograph and prompt to the chat-completions endpoint and
/// returns the model's raw text reply.
pub async fn analyze_image(image_bytes: &[u8], prompt: &str) -> Result<String, ProviderError> {
    let payload = json!({
        "model": CONFIG.openai_model,
        "messages": [{
            "role": "user",
            "content": build_message_content(prompt, image_bytes)
        }],
        "max_tokens": CONFIG.openai_max_tokens,
    });

    log_llm_timing("openai", &CONFIG.openai_model, "analyze_image", None, || async {
        let response = call_chat_completions(&payload).await?;
        extract_content(&response)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_content_carries_text_and_data_url() {
        let content = build_message_content("describe this", &[0xFF, 0xD8, 0xFF, 0xE0]);
        let parts = content.as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["text"], "describe this");
        let url = parts[1]["image_url"]["url"].as_str().unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn content_extraction_rejects_empty_replies() {
        let response = json!({ "choices": [{ "message": { "content": "  " } }] });
        assert!(matches!(
            extract_content(&response),
            Err(ProviderError::EmptyReply)
        ));

        let response = json!({ "choices": [{ "message": { "content": "Warm Autumn" } }] });
        assert_eq!(extract_content(&response).unwrap(), "Warm Autumn");
    }
}
