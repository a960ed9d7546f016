use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::fixtures::FixtureKind;

const INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `GET /fixtures` — the canned response kinds a request can ask for via
/// `response_source=fixture`.
pub async fn fixtures() -> Json<Value> {
    let available: Vec<&'static str> = FixtureKind::ALL.iter().map(|kind| kind.name()).collect();
    Json(json!({ "available_types": available }))
}

pub async fn status() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "openai_configured": CONFIG.has_openai_key(),
        "gemini_configured": CONFIG.has_gemini_key(),
        "fixture_types": FixtureKind::ALL.len(),
    }))
}
