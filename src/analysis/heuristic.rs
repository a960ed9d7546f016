use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::types::{CanonicalAnalysis, FashionColors, FashionGuidance, Observations};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Reasoning,
    FashionColors,
    Disclaimer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subsection {
    None,
    ExcellentChoices,
    HairColors,
    Makeup,
    MakeupBlush,
    MakeupLipstick,
    MakeupEyeshadow,
}

static MARKUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_#`]+").expect("valid markup regex"));

const SEASONS: [&str; 4] = ["autumn", "winter", "spring", "summer"];
const QUALIFIERS: [&str; 4] = ["warm", "true", "deep", "soft"];

fn strip_markup(line: &str) -> String {
    MARKUP_RE.replace_all(line, "").trim().to_string()
}

fn push_line(field: &mut String, line: &str) {
    field.push_str(line);
    field.push('\n');
}

/// Line-oriented fallback parser for prose replies without usable JSON.
/// Applies the keyword rules in a fixed priority order, first match wins;
/// content lines accumulate under the currently open section/subsection
/// and lines seen before any section opens are dropped. Total for every
/// input.
pub fn extract(text: &str) -> CanonicalAnalysis {
    let mut observations = Observations::default();
    let mut reasoning = String::new();
    let mut guidance = FashionGuidance::default();
    let mut disclaimer = String::new();

    let mut section = Section::None;
    let mut subsection = Subsection::None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();

        if lowered.contains("skin tone") || lowered.contains("skin:") {
            observations.skin_tone = strip_markup(line);
        } else if lowered.contains("undertone") {
            observations.undertone = strip_markup(line);
        } else if lowered.contains("contrast") {
            observations.contrast = strip_markup(line);
        } else if SEASONS.iter().any(|season| lowered.contains(season))
            && QUALIFIERS.iter().any(|qualifier| lowered.contains(qualifier))
        {
            observations.overall_type = strip_markup(line);
        } else if lowered.contains("here's why") || lowered.contains("why:") {
            section = Section::Reasoning;
            subsection = Subsection::None;
        } else if lowered.contains("fashion colors")
            || lowered.contains("recommendations")
            || lowered.contains("best colors")
        {
            section = Section::FashionColors;
            subsection = Subsection::None;
        } else if lowered.contains("excellent choices")
            || lowered.contains("best choices")
            || lowered.contains("primary colors")
        {
            section = Section::FashionColors;
            subsection = Subsection::ExcellentChoices;
        } else if lowered.contains("hair color") || lowered.contains("hair:") {
            section = Section::FashionColors;
            subsection = Subsection::HairColors;
        } else if lowered.contains("makeup") || lowered.contains("cosmetics") {
            section = Section::FashionColors;
            subsection = Subsection::Makeup;
        } else if lowered.contains("blush") {
            section = Section::FashionColors;
            subsection = Subsection::MakeupBlush;
        } else if lowered.contains("lipstick") || lowered.contains("lips") {
            section = Section::FashionColors;
            subsection = Subsection::MakeupLipstick;
        } else if lowered.contains("eyeshadow") || lowered.contains("eyes") {
            section = Section::FashionColors;
            subsection = Subsection::MakeupEyeshadow;
        } else if lowered.contains("disclaimer")
            || lowered.contains("note:")
            || lowered.contains("important:")
        {
            section = Section::Disclaimer;
            subsection = Subsection::None;
        } else {
            match section {
                Section::Reasoning => push_line(&mut reasoning, line),
                Section::FashionColors => match subsection {
                    Subsection::HairColors => push_line(&mut guidance.hair_colors, line),
                    Subsection::MakeupBlush => push_line(&mut guidance.makeup.blush, line),
                    Subsection::MakeupLipstick => push_line(&mut guidance.makeup.lipstick, line),
                    Subsection::MakeupEyeshadow => push_line(&mut guidance.makeup.eyeshadow, line),
                    Subsection::Makeup => {
                        // Content under a bare makeup header applies to
                        // every sub-field.
                        push_line(&mut guidance.makeup.blush, line);
                        push_line(&mut guidance.makeup.lipstick, line);
                        push_line(&mut guidance.makeup.eyeshadow, line);
                    }
                    Subsection::ExcellentChoices | Subsection::None => {
                        push_line(&mut guidance.excellent_choices, line)
                    }
                },
                Section::Disclaimer => push_line(&mut disclaimer, line),
                Section::None => {}
            }
        }
    }

    CanonicalAnalysis {
        observations,
        reasoning,
        fashion_colors: FashionColors::Structured(guidance),
        fashion_colors_palette: String::new(),
        disclaimer,
        full_response: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guidance(record: &CanonicalAnalysis) -> &FashionGuidance {
        match &record.fashion_colors {
            FashionColors::Structured(guidance) => guidance,
            FashionColors::Flat(_) => panic!("heuristic output is always structured"),
        }
    }

    #[test]
    fn section_switch_routes_reasoning_lines() {
        let record = extract("Undertone: cool\nHere's why:\nI look great in blue.\n");
        assert_eq!(record.observations.undertone, "Undertone: cool");
        assert_eq!(record.reasoning, "I look great in blue.\n");
        assert_eq!(guidance(&record).excellent_choices, "");
    }

    #[test]
    fn contrast_outranks_season_classification() {
        let record = extract("High contrast for a soft summer look");
        assert_eq!(
            record.observations.contrast,
            "High contrast for a soft summer look"
        );
        assert_eq!(record.observations.overall_type, "");
    }

    #[test]
    fn season_with_qualifier_sets_overall_type() {
        let record = extract("You look like a true Winter.");
        assert_eq!(record.observations.overall_type, "You look like a true Winter.");
    }

    #[test]
    fn season_without_qualifier_is_ordinary_content() {
        let record = extract("Why:\nWinter colors dominate.\n");
        assert_eq!(record.observations.overall_type, "");
        assert_eq!(record.reasoning, "Winter colors dominate.\n");
    }

    #[test]
    fn observation_lines_are_markup_stripped() {
        let record = extract("*   **Skin Tone:** Fair to Medium");
        assert_eq!(record.observations.skin_tone, "Skin Tone: Fair to Medium");
    }

    #[test]
    fn lines_before_any_section_are_dropped() {
        let record = extract("Hello there, lovely photo!\nHere's why:\nBecause colors.\n");
        assert_eq!(record.reasoning, "Because colors.\n");
        assert_eq!(guidance(&record).excellent_choices, "");
        assert_eq!(record.disclaimer, "");
    }

    #[test]
    fn fashion_section_defaults_to_excellent_choices() {
        let record = extract("Best colors:\n- Camel\n- Rust\n");
        assert_eq!(guidance(&record).excellent_choices, "- Camel\n- Rust\n");
    }

    #[test]
    fn makeup_subsections_route_to_their_fields() {
        let text = "Makeup:\nBlush:\nPeach shades.\nLipstick:\nTerracotta.\nEyeshadow:\nGolden brown.\n";
        let record = extract(text);
        let makeup = &guidance(&record).makeup;
        assert_eq!(makeup.blush, "Peach shades.\n");
        assert_eq!(makeup.lipstick, "Terracotta.\n");
        assert_eq!(makeup.eyeshadow, "Golden brown.\n");
    }

    #[test]
    fn bare_makeup_content_applies_to_all_fields() {
        let record = extract("Makeup:\nKeep it warm toned.\n");
        let makeup = &guidance(&record).makeup;
        assert_eq!(makeup.blush, "Keep it warm toned.\n");
        assert_eq!(makeup.lipstick, "Keep it warm toned.\n");
        assert_eq!(makeup.eyeshadow, "Keep it warm toned.\n");
    }

    #[test]
    fn disclaimer_lines_accumulate() {
        let record = extract("Disclaimer:\nThis is only a guide.\nTrust a professional.\n");
        assert_eq!(record.disclaimer, "This is only a guide.\nTrust a professional.\n");
    }

    #[test]
    fn empty_input_yields_empty_record_with_full_response() {
        let record = extract("");
        assert_eq!(record.observations, Observations::default());
        assert_eq!(record.full_response, "");
    }
}
