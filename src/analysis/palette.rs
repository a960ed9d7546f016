use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{self, SeasonCategory};

/// Display bound for rendered palettes.
pub const MAX_PALETTE_COLORS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub hex: String,
    pub category: SeasonCategory,
}

fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = true;
    for ch in name.chars() {
        if ch.is_alphabetic() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            boundary = false;
        } else {
            out.push(ch);
            boundary = true;
        }
    }
    out
}

/// Entries for an explicit hex list: input order, capped, no semantic
/// names available so each gets a "Color N" placeholder.
pub fn hex_entries(hex_codes: &[String]) -> Vec<ColorEntry> {
    hex_codes
        .iter()
        .take(MAX_PALETTE_COLORS)
        .enumerate()
        .map(|(index, hex)| ColorEntry {
            name: format!("Color {}", index + 1),
            hex: hex.clone(),
            category: SeasonCategory::Neutral,
        })
        .collect()
}

pub fn palette_from_hex(hex_codes: &[String]) -> String {
    if hex_codes.is_empty() {
        return String::new();
    }
    render_palette(&hex_entries(hex_codes))
}

/// Scans the text for every lexicon color name appearing as a substring,
/// ordered by first appearance (lexicon order breaks ties). When nothing
/// matches, falls back to a whole seasonal palette chosen from season and
/// modifier keywords in the text.
pub fn colors_from_text(text: &str) -> Vec<ColorEntry> {
    let lowered = text.to_lowercase();

    let mut found: Vec<(usize, ColorEntry)> = Vec::new();
    for &(name, hex) in lexicon::entries() {
        if let Some(position) = lowered.find(name) {
            found.push((
                position,
                ColorEntry {
                    name: title_case(name),
                    hex: hex.to_string(),
                    category: lexicon::category_of(name),
                },
            ));
        }
    }

    if found.is_empty() {
        return default_palette(&lowered);
    }

    found.sort_by_key(|(position, _)| *position);
    found
        .into_iter()
        .map(|(_, entry)| entry)
        .take(MAX_PALETTE_COLORS)
        .collect()
}

fn default_palette(lowered_text: &str) -> Vec<ColorEntry> {
    let category = if lowered_text.contains("autumn") {
        if lowered_text.contains("warm") {
            SeasonCategory::WarmAutumn
        } else if lowered_text.contains("deep") {
            SeasonCategory::DeepAutumn
        } else {
            SeasonCategory::WarmAutumn
        }
    } else if lowered_text.contains("winter") {
        SeasonCategory::CoolWinter
    } else if lowered_text.contains("summer") {
        SeasonCategory::SoftSummer
    } else if lowered_text.contains("spring") {
        if lowered_text.contains("bright") {
            SeasonCategory::BrightSpring
        } else if lowered_text.contains("light") {
            SeasonCategory::LightSpring
        } else {
            SeasonCategory::BrightSpring
        }
    } else {
        SeasonCategory::WarmAutumn
    };

    lexicon::members_of(category)
        .iter()
        .take(MAX_PALETTE_COLORS)
        .map(|name| ColorEntry {
            name: title_case(name),
            // Member lists are a subset of the color table.
            hex: lexicon::lookup(name)
                .expect("lexicon member has a hex entry")
                .to_string(),
            category,
        })
        .collect()
}

/// Returns the text untouched together with the rendered palette markup.
pub fn palette_from_text(text: &str) -> (String, String) {
    let entries = colors_from_text(text);
    (text.to_string(), render_palette(&entries))
}

pub fn render_palette(entries: &[ColorEntry]) -> String {
    if entries.is_empty() {
        return "<p>No specific colors found in the analysis.</p>".to_string();
    }

    let mut html = String::from("<div class=\"color-palette\">");
    html.push_str("<h5>Recommended Color Palette:</h5>");
    html.push_str("<div class=\"color-swatches\">");
    for entry in entries {
        html.push_str(&format!(
            "<div class=\"color-swatch\" title=\"{name}\"><div class=\"color-preview\" style=\"background-color: {hex}\"></div><div class=\"color-name\">{name}</div></div>",
            name = entry.name,
            hex = entry.hex
        ));
    }
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_entries_cap_at_eight_and_preserve_order() {
        let hex_codes: Vec<String> = (0..10).map(|i| format!("#0000{i:02}")).collect();
        let entries = hex_entries(&hex_codes);
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].name, "Color 1");
        assert_eq!(entries[7].name, "Color 8");
        assert_eq!(entries[0].hex, "#000000");
        assert_eq!(entries[7].hex, "#000007");
    }

    #[test]
    fn empty_hex_list_renders_nothing() {
        assert_eq!(palette_from_hex(&[]), "");
    }

    #[test]
    fn text_matches_are_ordered_by_first_appearance() {
        let entries = colors_from_text("I love teal and camel together.");
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Teal", "Camel"]);
    }

    #[test]
    fn text_matches_cap_at_eight() {
        let text = "rust, teal, camel, ivory, coral, mauve, lavender, silver, black, peach";
        let entries = colors_from_text(text);
        assert_eq!(entries.len(), 8);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Rust", "Teal", "Camel", "Ivory", "Coral", "Mauve", "Lavender", "Silver"]
        );
    }

    #[test]
    fn deep_autumn_keyword_fallback_uses_member_list() {
        let entries = colors_from_text("You are a Deep Autumn");
        assert_eq!(entries.len(), 8);
        assert_eq!(entries[0].name, "Deep Burgundy");
        assert!(entries.iter().all(|e| e.category == SeasonCategory::DeepAutumn));

        let (text, markup) = palette_from_text("You are a Deep Autumn");
        assert_eq!(text, "You are a Deep Autumn");
        assert!(markup.contains("color-palette"));
    }

    #[test]
    fn winter_keyword_falls_back_to_cool_winter() {
        let entries = colors_from_text("a classic winter look");
        assert!(entries.iter().all(|e| e.category == SeasonCategory::CoolWinter));
        assert_eq!(entries[0].name, "Deep Emerald Green");
    }

    #[test]
    fn unmatched_text_defaults_to_warm_autumn() {
        let entries = colors_from_text("nothing recognizable here");
        assert_eq!(entries.len(), 8);
        assert!(entries.iter().all(|e| e.category == SeasonCategory::WarmAutumn));
        assert_eq!(entries[0].name, "Camel");
    }

    #[test]
    fn rendered_markup_labels_each_swatch() {
        let entries = colors_from_text("camel");
        let markup = render_palette(&entries);
        assert!(markup.contains("title=\"Camel\""));
        assert!(markup.contains("background-color: #C19A6B"));
    }

    #[test]
    fn empty_entry_list_renders_placeholder() {
        assert_eq!(
            render_palette(&[]),
            "<p>No specific colors found in the analysis.</p>"
        );
    }

    #[test]
    fn title_case_handles_hyphenated_names() {
        assert_eq!(title_case("off-white"), "Off-White");
        assert_eq!(title_case("olive green"), "Olive Green");
    }
}
