use std::net::SocketAddr;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use dotenvy::dotenv;
use tracing::{info, warn};

mod analysis;
mod config;
mod fixtures;
mod handlers;
mod llm;
mod source;
mod utils;

use config::CONFIG;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let _guards = init_logging();

    if !CONFIG.has_openai_key() && !CONFIG.has_gemini_key() {
        warn!("No provider API key configured; only fixture responses will succeed.");
    }

    let app = Router::new()
        .route("/", get(handlers::meta::index))
        .route("/upload", post(handlers::upload::upload))
        .route("/fixtures", get(handlers::meta::fixtures))
        .route("/status", get(handlers::meta::status))
        .layer(DefaultBodyLimit::max(CONFIG.max_upload_bytes));

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Starting seasonal color advisor on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {err}");
    }
}
