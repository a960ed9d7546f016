use anyhow::{anyhow, Result};

use crate::fixtures::FixtureKind;
use crate::llm::{self, ProviderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Gemini,
}

impl Provider {
    pub fn from_name(name: &str) -> Option<Provider> {
        match name {
            "openai" => Some(Provider::OpenAi),
            "gemini" => Some(Provider::Gemini),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
        }
    }

    /// Display name used in degraded analysis text.
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }
}

/// Where a request's analysis text comes from. Resolved per request from
/// the submitted form fields; there is no process-wide mode to flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    Live(Provider),
    Fixture(FixtureKind),
}

impl ResponseSource {
    /// Resolves the `response_source` / `llm_provider` / `response_type`
    /// form fields. Empty fields take the historical defaults: live
    /// source, openai provider, random fixture kind.
    pub fn from_form(source: &str, provider: &str, response_type: &str) -> Result<ResponseSource> {
        match source.trim() {
            "" | "live" => {
                let provider = match provider.trim() {
                    "" => Provider::OpenAi,
                    name => Provider::from_name(name)
                        .ok_or_else(|| anyhow!("Invalid LLM provider"))?,
                };
                Ok(ResponseSource::Live(provider))
            }
            "fixture" => {
                let kind = match response_type.trim() {
                    "" | "random" => FixtureKind::random(),
                    name => FixtureKind::from_name(name)
                        .ok_or_else(|| anyhow!("Invalid fixture response type"))?,
                };
                Ok(ResponseSource::Fixture(kind))
            }
            _ => Err(anyhow!("Invalid response source")),
        }
    }

    pub async fn invoke(&self, image_bytes: &[u8], prompt: &str) -> Result<String, ProviderError> {
        match self {
            ResponseSource::Live(Provider::OpenAi) => {
                llm::openai::analyze_image(image_bytes, prompt).await
            }
            ResponseSource::Live(Provider::Gemini) => {
                llm::gemini::analyze_image(image_bytes, prompt).await
            }
            ResponseSource::Fixture(kind) => Ok(kind.response_text().to_string()),
        }
    }

    /// Label reported back to the client and in timing logs.
    pub fn label(&self) -> String {
        match self {
            ResponseSource::Live(provider) => provider.name().to_string(),
            ResponseSource::Fixture(kind) => format!("fixture:{}", kind.name()),
        }
    }

    /// Name interpolated into degraded "Error analyzing with …" text.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResponseSource::Live(provider) => provider.display_name(),
            ResponseSource::Fixture(_) => "fixture",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_default_to_live_openai() {
        let source = ResponseSource::from_form("", "", "").unwrap();
        assert_eq!(source, ResponseSource::Live(Provider::OpenAi));
    }

    #[test]
    fn named_provider_is_honored() {
        let source = ResponseSource::from_form("live", "gemini", "").unwrap();
        assert_eq!(source, ResponseSource::Live(Provider::Gemini));
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(ResponseSource::from_form("live", "claude", "").is_err());
    }

    #[test]
    fn fixture_kind_is_resolved_eagerly() {
        let source = ResponseSource::from_form("fixture", "", "deep_autumn").unwrap();
        assert_eq!(source, ResponseSource::Fixture(FixtureKind::DeepAutumn));
        assert_eq!(source.label(), "fixture:deep_autumn");
    }

    #[test]
    fn random_fixture_kind_is_never_degraded() {
        let source = ResponseSource::from_form("fixture", "", "random").unwrap();
        match source {
            ResponseSource::Fixture(kind) => assert!(!kind.is_degraded()),
            ResponseSource::Live(_) => panic!("expected a fixture source"),
        }
    }

    #[test]
    fn unknown_source_and_kind_are_rejected() {
        assert!(ResponseSource::from_form("recorded", "", "").is_err());
        assert!(ResponseSource::from_form("fixture", "", "surreal_spring").is_err());
    }

    #[tokio::test]
    async fn fixture_invocation_returns_the_canned_text() {
        let source = ResponseSource::Fixture(FixtureKind::WarmAutumn);
        let text = source.invoke(&[], "ignored").await.unwrap();
        assert_eq!(text, FixtureKind::WarmAutumn.response_text());
    }
}
