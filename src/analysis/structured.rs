use serde_json::Value;

use crate::analysis::types::{
    CanonicalAnalysis, FashionColors, FashionGuidance, MakeupGuidance, Observations,
};

/// Locates an embedded JSON object and maps its known field paths into a
/// canonical record, returning the record together with any explicit hex
/// palette the payload carried.
///
/// Detection is a plain first-`{` / last-`}` scan, not a balanced brace
/// matcher. Prose containing stray braces or several independent JSON
/// blocks can defeat it; that is a known limitation kept for parity with
/// the replies this parser was built against.
pub fn try_extract_json(text: &str) -> Option<(CanonicalAnalysis, Vec<String>)> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    let data: Value = serde_json::from_str(&text[start..=end]).ok()?;

    let str_at = |path: &str| -> String {
        data.pointer(path)
            .and_then(|value| value.as_str())
            .unwrap_or("")
            .to_string()
    };

    let observations = Observations {
        skin_tone: str_at("/analysis/skin_tone"),
        undertone: str_at("/analysis/undertone"),
        contrast: str_at("/analysis/contrast"),
        overall_type: str_at("/seasonal_type"),
    };

    let guidance = FashionGuidance {
        excellent_choices: str_at("/recommendations/fashion_colors/best_colors_description"),
        hair_colors: str_at("/recommendations/hair_color"),
        makeup: MakeupGuidance {
            blush: str_at("/recommendations/makeup/blush"),
            lipstick: str_at("/recommendations/makeup/lipstick"),
            eyeshadow: str_at("/recommendations/makeup/eyeshadow"),
        },
    };

    let hex_palette: Vec<String> = data
        .pointer("/recommendations/fashion_colors/color_palette_hex")
        .and_then(|value| value.as_array())
        .map(|values| {
            values
                .iter()
                .filter_map(|value| value.as_str())
                .map(|value| value.to_string())
                .collect()
        })
        .unwrap_or_default();

    let record = CanonicalAnalysis {
        observations,
        reasoning: str_at("/final_encouragement"),
        fashion_colors: FashionColors::Structured(guidance),
        fashion_colors_palette: String::new(),
        disclaimer: String::new(),
        full_response: text.to_string(),
    };

    Some((record, hex_palette))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WRAPPED: &str = r##"Here is your analysis, enjoy!

{
  "seasonal_type": "Warm Autumn",
  "analysis": {
    "skin_tone": "Medium with golden undertones",
    "undertone": "Warm",
    "contrast": "Medium to High"
  },
  "recommendations": {
    "fashion_colors": {
      "best_colors_description": "Camel and rust suit you.",
      "color_palette_hex": ["#C19A6B", "#B7410E"]
    },
    "hair_color": "Warm browns.",
    "makeup": {
      "blush": "Peach tones.",
      "lipstick": "Terracotta.",
      "eyeshadow": "Golden browns."
    }
  },
  "final_encouragement": "You will glow."
}

Let me know if you have questions."##;

    #[test]
    fn extracts_fields_despite_surrounding_prose() {
        let (record, hex_palette) = try_extract_json(WRAPPED).unwrap();
        assert_eq!(record.observations.overall_type, "Warm Autumn");
        assert_eq!(record.observations.skin_tone, "Medium with golden undertones");
        assert_eq!(record.observations.undertone, "Warm");
        assert_eq!(record.observations.contrast, "Medium to High");
        assert_eq!(record.reasoning, "You will glow.");
        match &record.fashion_colors {
            FashionColors::Structured(guidance) => {
                assert_eq!(guidance.excellent_choices, "Camel and rust suit you.");
                assert_eq!(guidance.hair_colors, "Warm browns.");
                assert_eq!(guidance.makeup.blush, "Peach tones.");
                assert_eq!(guidance.makeup.lipstick, "Terracotta.");
                assert_eq!(guidance.makeup.eyeshadow, "Golden browns.");
            }
            FashionColors::Flat(_) => panic!("expected the structured shape"),
        }
        assert_eq!(hex_palette, ["#C19A6B", "#B7410E"]);
        assert_eq!(record.full_response, WRAPPED);
    }

    #[test]
    fn missing_keys_default_to_empty_strings() {
        let (record, hex_palette) =
            try_extract_json(r#"{"seasonal_type": "Cool Winter"}"#).unwrap();
        assert_eq!(record.observations.overall_type, "Cool Winter");
        assert_eq!(record.observations.skin_tone, "");
        assert_eq!(record.reasoning, "");
        assert!(hex_palette.is_empty());
    }

    #[test]
    fn text_without_braces_is_not_json() {
        assert!(try_extract_json("just some prose").is_none());
        assert!(try_extract_json("").is_none());
    }

    #[test]
    fn reversed_braces_are_not_json() {
        assert!(try_extract_json("} nothing here {").is_none());
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        assert!(try_extract_json("{not valid json}").is_none());
        assert!(try_extract_json("prefix { \"a\": } suffix").is_none());
    }
}
