use std::env;

use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_max_tokens: i32,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_temperature: f32,
    pub gemini_top_k: i32,
    pub gemini_top_p: f32,
    pub gemini_max_output_tokens: i32,
    pub gemini_safety_settings: String,
    pub provider_timeout_seconds: u64,
    pub max_upload_bytes: usize,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(default)
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

fn normalize_gemini_safety_settings(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "permissive".to_string();
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "permissive" | "off" | "none" => "permissive".to_string(),
        "standard" => "standard".to_string(),
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}'; defaulting to permissive.",
                value
            );
            "permissive".to_string()
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Config {
            host: env_string("HOST", "0.0.0.0"),
            port: env_u16("PORT", 5001),
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            openai_api_key: env_string("OPENAI_API_KEY", ""),
            openai_base_url: env_string("OPENAI_BASE_URL", "https://api.openai.com/v1"),
            openai_model: env_string("OPENAI_MODEL", "gpt-4-vision-preview"),
            openai_max_tokens: env_i32("OPENAI_MAX_TOKENS", 1000),
            gemini_api_key: env_string("GEMINI_API_KEY", ""),
            gemini_model: env_string("GEMINI_MODEL", "gemini-2.0-flash-exp"),
            gemini_temperature: env_f32("GEMINI_TEMPERATURE", 0.7),
            gemini_top_k: env_i32("GEMINI_TOP_K", 40),
            gemini_top_p: env_f32("GEMINI_TOP_P", 0.95),
            gemini_max_output_tokens: env_i32("GEMINI_MAX_OUTPUT_TOKENS", 2048),
            gemini_safety_settings: normalize_gemini_safety_settings(env_string(
                "GEMINI_SAFETY_SETTINGS",
                "permissive",
            )),
            provider_timeout_seconds: env_u64("PROVIDER_TIMEOUT_SECONDS", 90),
            max_upload_bytes: env_usize("MAX_UPLOAD_BYTES", 16 * 1024 * 1024),
        })
    }

    pub fn has_openai_key(&self) -> bool {
        !self.openai_api_key.trim().is_empty()
    }

    pub fn has_gemini_key(&self) -> bool {
        !self.gemini_api_key.trim().is_empty()
    }
}

/// Prompt sent with every upload unless the request carries its own.
pub const DEFAULT_ANALYSIS_PROMPT: &str = "Analyze this image and provide detailed information about the person's skin tone. \
Based on the skin tone analysis, suggest the best colors that would complement this skin tone for clothing, makeup, and accessories. \
Please provide specific color recommendations with explanations for why these colors work well with this skin tone. \
Consider warm vs cool undertones and provide practical fashion advice.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safety_settings_normalize_to_known_profiles() {
        assert_eq!(normalize_gemini_safety_settings("OFF".to_string()), "permissive");
        assert_eq!(
            normalize_gemini_safety_settings("standard".to_string()),
            "standard"
        );
        assert_eq!(normalize_gemini_safety_settings("  ".to_string()), "permissive");
        assert_eq!(
            normalize_gemini_safety_settings("strictest".to_string()),
            "permissive"
        );
    }
}
