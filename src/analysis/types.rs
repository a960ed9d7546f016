use serde::{Deserialize, Serialize};

/// Per-feature observations pulled from a provider reply. An empty string
/// means the field could not be determined; fields are never absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observations {
    pub skin_tone: String,
    pub undertone: String,
    pub contrast: String,
    pub overall_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeupGuidance {
    pub blush: String,
    pub lipstick: String,
    pub eyeshadow: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FashionGuidance {
    pub excellent_choices: String,
    pub hair_colors: String,
    pub makeup: MakeupGuidance,
}

/// Color guidance arrives in one of two shapes: the legacy flat text block
/// still present in older records, or the structured guidance both
/// extractors emit today. Consumers must match on the shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FashionColors {
    Flat(String),
    Structured(FashionGuidance),
}

impl Default for FashionColors {
    fn default() -> Self {
        FashionColors::Structured(FashionGuidance::default())
    }
}

/// The normalized output record for a single provider reply.
///
/// `full_response` always carries the verbatim input text, whether or not
/// extraction succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAnalysis {
    pub observations: Observations,
    pub reasoning: String,
    pub fashion_colors: FashionColors,
    pub fashion_colors_palette: String,
    pub disclaimer: String,
    pub full_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fashion_colors_deserializes_both_shapes() {
        let flat: FashionColors = serde_json::from_str("\"camel and rust\"").unwrap();
        assert_eq!(flat, FashionColors::Flat("camel and rust".to_string()));

        let structured: FashionColors = serde_json::from_str(
            r#"{"excellent_choices":"camel","hair_colors":"","makeup":{"blush":"","lipstick":"","eyeshadow":""}}"#,
        )
        .unwrap();
        match structured {
            FashionColors::Structured(guidance) => {
                assert_eq!(guidance.excellent_choices, "camel");
            }
            FashionColors::Flat(_) => panic!("expected the structured shape"),
        }
    }
}
