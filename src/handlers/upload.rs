use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::{error, info, warn};

use crate::analysis;
use crate::config::DEFAULT_ANALYSIS_PROMPT;
use crate::llm::media;
use crate::source::ResponseSource;
use crate::utils::timing::{complete_request_timer, start_request_timer};

#[derive(Debug, Default)]
struct UploadForm {
    file_name: String,
    file_bytes: Vec<u8>,
    llm_provider: String,
    custom_prompt: String,
    response_source: String,
    response_type: String,
}

async fn collect_form(multipart: &mut Multipart) -> anyhow::Result<UploadForm> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(|name| name.to_string()) else {
            continue;
        };
        match name.as_str() {
            "file" => {
                form.file_name = field.file_name().unwrap_or_default().to_string();
                form.file_bytes = field.bytes().await?.to_vec();
            }
            "llm_provider" => form.llm_provider = field.text().await?,
            "custom_prompt" => form.custom_prompt = field.text().await?,
            "response_source" => form.response_source = field.text().await?,
            "response_type" => form.response_type = field.text().await?,
            _ => {}
        }
    }
    Ok(form)
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

/// `POST /upload` — accepts the photograph, invokes the resolved response
/// source, and returns both the raw analysis text and its normalized form.
pub async fn upload(mut multipart: Multipart) -> Response {
    let form = match collect_form(&mut multipart).await {
        Ok(form) => form,
        Err(err) => {
            error!("Failed to read upload form: {err}");
            return bad_request("Malformed multipart request");
        }
    };

    if form.file_bytes.is_empty() {
        return bad_request("No file part");
    }
    if form.file_name.is_empty() {
        return bad_request("No selected file");
    }
    if !media::has_allowed_extension(&form.file_name) {
        return bad_request("Invalid file type");
    }

    let source = match ResponseSource::from_form(
        &form.response_source,
        &form.llm_provider,
        &form.response_type,
    ) {
        Ok(source) => source,
        Err(err) => return bad_request(&err.to_string()),
    };

    let prompt = if form.custom_prompt.trim().is_empty() {
        DEFAULT_ANALYSIS_PROMPT
    } else {
        form.custom_prompt.as_str()
    };

    let mut timer = start_request_timer("upload", &source.label(), &form.file_name);
    let sniffed = media::detect_mime_type(&form.file_bytes).unwrap_or_else(|| "unknown".to_string());
    info!(
        "Processing upload {} ({} bytes, {}) via {}",
        form.file_name,
        form.file_bytes.len(),
        sniffed,
        source.label()
    );

    // A provider failure is not a request failure: the error text becomes
    // the analysis text and the pipeline degrades it like any other
    // unparseable reply.
    let analysis_text = match source.invoke(&form.file_bytes, prompt).await {
        Ok(text) => text,
        Err(err) => {
            warn!("Provider call failed: {err}");
            complete_request_timer(&mut timer, "degraded", Some(err.to_string()));
            format!("Error analyzing with {}: {}", source.display_name(), err)
        }
    };

    let parsed_analysis = analysis::normalize(&analysis_text);
    complete_request_timer(&mut timer, "success", None);

    Json(json!({
        "success": true,
        "analysis": analysis_text,
        "parsed_analysis": parsed_analysis,
        "provider": source.label(),
    }))
    .into_response()
}
