use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::CONFIG;
use crate::llm::media::detect_mime_type;
use crate::llm::{redact_api_key, summarize_error_body, truncate_for_log, ProviderError};
use crate::utils::http::get_http_client;
use crate::utils::timing::log_llm_timing;

const MAX_RETRY_ATTEMPTS: usize = 2;
const RETRY_BASE_DELAY_MS: u64 = 900;

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    parts: Option<Vec<GeminiPart>>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

fn should_retry_error(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

fn should_retry_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS
        || status == StatusCode::REQUEST_TIMEOUT
        || status.is_server_error()
}

fn retry_delay(attempt: usize) -> Duration {
    let attempt = attempt.max(1) as u64;
    Duration::from_millis(RETRY_BASE_DELAY_MS.saturating_mul(attempt))
}

fn build_safety_settings() -> Vec<Value> {
    let profile = CONFIG.gemini_safety_settings.as_str();
    let threshold = match profile {
        "standard" => "BLOCK_MEDIUM_AND_ABOVE",
        "permissive" => "OFF",
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}', using permissive defaults.",
                profile
            );
            "OFF"
        }
    };

    vec![
        json!({ "category": "HARM_CATEGORY_HARASSMENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_HATE_SPEECH", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_DANGEROUS_CONTENT", "threshold": threshold }),
        json!({ "category": "HARM_CATEGORY_CIVIC_INTEGRITY", "threshold": threshold }),
    ]
}

fn extract_text(response: GeminiResponse) -> String {
    let mut text_parts = Vec::new();
    for candidate in response.candidates.unwrap_or_default() {
        if let Some(content) = candidate.content {
            for part in content.parts.unwrap_or_default() {
                if let Some(text) = part.text {
                    if !text.trim().is_empty() {
                        text_parts.push(text);
                    }
                }
            }
        }
    }
    text_parts.join("\n")
}

async fn call_generate_content(model: &str, payload: Value) -> Result<GeminiResponse, ProviderError> {
    let client = get_http_client();
    let url = format!(
        "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
        model, CONFIG.gemini_api_key
    );

    let mut attempt = 0usize;
    loop {
        attempt += 1;
        let response = match client
            .post(&url)
            .timeout(Duration::from_secs(CONFIG.provider_timeout_seconds))
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                let err_text = redact_api_key(&err.to_string(), &CONFIG.gemini_api_key);
                let should_retry = should_retry_error(&err) && attempt < MAX_RETRY_ATTEMPTS;
                warn!(
                    "Gemini request failed to send: {} (timeout={}, connect={}, retrying={})",
                    err_text,
                    err.is_timeout(),
                    err.is_connect(),
                    should_retry
                );
                if should_retry {
                    tokio::time::sleep(retry_delay(attempt)).await;
                    continue;
                }
                return Err(ProviderError::Request(err_text));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let (message, body_summary) = summarize_error_body(&body);
            let should_retry = should_retry_status(status) && attempt < MAX_RETRY_ATTEMPTS;
            warn!(
                "Gemini API error: status={}, body={}, retrying={}",
                status, body_summary, should_retry
            );
            if tracing::enabled!(tracing::Level::DEBUG) {
                debug!(
                    target: "llm.gemini",
                    status = %status,
                    body = %truncate_for_log(&body, 4000)
                );
            }
            if should_retry {
                tokio::time::sleep(retry_delay(attempt)).await;
                continue;
            }
            return Err(ProviderError::Api {
                status: status.as_u16(),
                detail: message.unwrap_or(body_summary),
            });
        }

        return response
            .json::<GeminiResponse>()
            .await
            .map_err(|err| ProviderError::Request(err.to_string()));
    }
}

/// Sends the photograph and prompt through `generateContent` and returns
/// the joined text parts of the reply.
pub async fn analyze_image(image_bytes: &[u8], prompt: &str) -> Result<String, ProviderError> {
    let mime_type = detect_mime_type(image_bytes).unwrap_or_else(|| "image/jpeg".to_string());
    let encoded = general_purpose::STANDARD.encode(image_bytes);

    let payload = json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": prompt },
                { "inlineData": { "mimeType": mime_type, "data": encoded } }
            ]
        }],
        "generationConfig": {
            "temperature": CONFIG.gemini_temperature,
            "topK": CONFIG.gemini_top_k,
            "topP": CONFIG.gemini_top_p,
            "maxOutputTokens": CONFIG.gemini_max_output_tokens,
        },
        "safetySettings": build_safety_settings(),
    });

    let model = CONFIG.gemini_model.as_str();
    log_llm_timing("gemini", model, "analyze_image", None, || async {
        let response = call_generate_content(model, payload).await?;
        let text = extract_text(response);
        if text.trim().is_empty() {
            warn!("Gemini response contained no text parts (model: {model})");
            return Err(ProviderError::EmptyReply);
        }
        Ok(text)
    })
    .await
}
