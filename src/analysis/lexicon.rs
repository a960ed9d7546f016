use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Seasonal palette categories used by color analysts, plus a neutral
/// bucket for colors that belong to no season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonCategory {
    WarmAutumn,
    CoolWinter,
    SoftSummer,
    BrightSpring,
    DeepAutumn,
    LightSpring,
    Neutral,
}

// The raw table keeps one row per (category block, name) the way the
// palette was authored, so duplicate names across blocks are visible.
// Lookup resolves duplicates last-definition-wins.
const COLOR_TABLE: &[(&str, &str)] = &[
    // Warm Autumn
    ("camel", "#C19A6B"),
    ("olive green", "#6B8E23"),
    ("chocolate brown", "#7B3F00"),
    ("warm gray", "#8B7355"),
    ("ivory", "#FFFFF0"),
    ("mustard yellow", "#FFD700"),
    ("burnt orange", "#CC5500"),
    ("rust", "#B7410E"),
    ("forest green", "#228B22"),
    ("teal", "#008080"),
    ("tomato red", "#FF6347"),
    ("warm brown", "#8B4513"),
    ("golden yellow", "#FFD700"),
    ("rich orange", "#FF8C00"),
    // Cool Winter
    ("deep emerald green", "#006400"),
    ("royal blue", "#4169E1"),
    ("rich purple", "#800080"),
    ("true red", "#FF0000"),
    ("hot pink", "#FF69B4"),
    ("pure white", "#FFFFFF"),
    ("charcoal gray", "#36454F"),
    ("navy blue", "#000080"),
    ("black", "#000000"),
    ("silver", "#C0C0C0"),
    ("icy blue", "#87CEEB"),
    ("bright magenta", "#FF00FF"),
    ("electric blue", "#00BFFF"),
    // Soft Summer
    ("soft white", "#F5F5F5"),
    ("light gray", "#D3D3D3"),
    ("muted navy", "#2F4F4F"),
    ("dusty rose", "#DC143C"),
    ("lavender", "#E6E6FA"),
    ("sage green", "#9DC183"),
    ("dusty blue", "#4682B4"),
    ("mauve", "#E0B0FF"),
    ("soft teal", "#20B2AA"),
    // Bright Spring
    ("coral", "#FF7F50"),
    ("bright yellow", "#FFFF00"),
    ("kelly green", "#4CBB17"),
    ("bright blue", "#0000FF"),
    ("hot pink", "#FF69B4"),
    ("cream", "#FFFDD0"),
    ("light beige", "#F5F5DC"),
    ("warm white", "#FAFAFA"),
    ("light brown", "#A0522D"),
    ("gold", "#FFD700"),
    ("bright orange", "#FFA500"),
    ("lime green", "#32CD32"),
    ("turquoise", "#40E0D0"),
    // Deep Autumn
    ("deep burgundy", "#800020"),
    ("forest green", "#228B22"),
    ("navy blue", "#000080"),
    ("chocolate brown", "#7B3F00"),
    ("deep teal", "#008080"),
    ("charcoal gray", "#36454F"),
    ("deep brown", "#654321"),
    ("warm black", "#1C1C1C"),
    ("deep orange", "#FF8C00"),
    ("olive green", "#6B8E23"),
    ("rich purple", "#800080"),
    // Light Spring
    ("peach", "#FFCBA4"),
    ("light yellow", "#FFFFE0"),
    ("mint green", "#98FF98"),
    ("sky blue", "#87CEEB"),
    ("light pink", "#FFB6C1"),
    ("ivory", "#FFFFF0"),
    ("light beige", "#F5F5DC"),
    ("warm white", "#FAFAFA"),
    ("light gray", "#D3D3D3"),
    ("light coral", "#F08080"),
    ("soft lavender", "#E6E6FA"),
    ("light mint", "#98FF98"),
    // Neutrals
    ("gray", "#808080"),
    ("beige", "#F5F5DC"),
    ("tan", "#D2B48C"),
    ("cream", "#FFFDD0"),
    ("white", "#FFFFFF"),
    ("off-white", "#FAFAFA"),
    ("light gray", "#D3D3D3"),
    ("medium gray", "#A9A9A9"),
    ("dark gray", "#696969"),
];

const CATEGORY_MEMBERS: &[(SeasonCategory, &[&str])] = &[
    (
        SeasonCategory::WarmAutumn,
        &[
            "camel",
            "olive green",
            "chocolate brown",
            "warm gray",
            "ivory",
            "mustard yellow",
            "burnt orange",
            "rust",
            "forest green",
            "teal",
            "tomato red",
        ],
    ),
    (
        SeasonCategory::CoolWinter,
        &[
            "deep emerald green",
            "royal blue",
            "rich purple",
            "true red",
            "hot pink",
            "pure white",
            "charcoal gray",
            "navy blue",
            "black",
            "silver",
            "icy blue",
        ],
    ),
    (
        SeasonCategory::SoftSummer,
        &[
            "soft white",
            "light gray",
            "muted navy",
            "dusty rose",
            "lavender",
            "sage green",
            "dusty blue",
            "mauve",
            "soft teal",
        ],
    ),
    (
        SeasonCategory::BrightSpring,
        &[
            "coral",
            "bright yellow",
            "kelly green",
            "bright blue",
            "hot pink",
            "cream",
            "light beige",
            "warm white",
            "light brown",
            "gold",
        ],
    ),
    (
        SeasonCategory::DeepAutumn,
        &[
            "deep burgundy",
            "forest green",
            "navy blue",
            "chocolate brown",
            "deep teal",
            "charcoal gray",
            "deep brown",
            "warm black",
        ],
    ),
    (
        SeasonCategory::LightSpring,
        &[
            "peach",
            "light yellow",
            "mint green",
            "sky blue",
            "light pink",
            "ivory",
            "light beige",
            "warm white",
            "light gray",
        ],
    ),
];

// Deduplicated view: first-definition position, last-definition hex.
static COLOR_ENTRIES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    let mut order: Vec<&'static str> = Vec::new();
    let mut hex_by_name: HashMap<&'static str, &'static str> = HashMap::new();
    for &(name, hex) in COLOR_TABLE {
        if !hex_by_name.contains_key(name) {
            order.push(name);
        }
        hex_by_name.insert(name, hex);
    }
    order.into_iter().map(|name| (name, hex_by_name[name])).collect()
});

/// All known color names with their resolved hex codes, in table order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    &COLOR_ENTRIES
}

/// Case-insensitive name lookup. No fuzzy matching.
pub fn lookup(name: &str) -> Option<&'static str> {
    let needle = name.to_lowercase();
    COLOR_ENTRIES
        .iter()
        .find(|(candidate, _)| *candidate == needle)
        .map(|(_, hex)| *hex)
}

/// The seasonal category a color belongs to; the first member list that
/// declares the name wins, anything unlisted is neutral.
pub fn category_of(name: &str) -> SeasonCategory {
    let needle = name.to_lowercase();
    for (category, members) in CATEGORY_MEMBERS {
        if members.contains(&needle.as_str()) {
            return *category;
        }
    }
    SeasonCategory::Neutral
}

pub fn members_of(category: SeasonCategory) -> &'static [&'static str] {
    CATEGORY_MEMBERS
        .iter()
        .find(|(candidate, _)| *candidate == category)
        .map(|(_, members)| *members)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("Olive Green"), Some("#6B8E23"));
        assert_eq!(lookup("CAMEL"), Some("#C19A6B"));
    }

    #[test]
    fn unknown_names_have_no_hex() {
        assert_eq!(lookup("cerulean"), None);
    }

    #[test]
    fn first_declaring_category_wins_for_duplicates() {
        assert_eq!(category_of("hot pink"), SeasonCategory::CoolWinter);
        assert_eq!(category_of("forest green"), SeasonCategory::WarmAutumn);
        assert_eq!(category_of("navy blue"), SeasonCategory::CoolWinter);
    }

    #[test]
    fn unlisted_names_fall_back_to_neutral() {
        assert_eq!(category_of("tan"), SeasonCategory::Neutral);
        assert_eq!(category_of("no such color"), SeasonCategory::Neutral);
    }

    // Duplicate rows currently agree on their hex value, which keeps the
    // last-definition-wins rule latent. If an edit diverges them, this
    // failure is the prompt to revisit that rule with the product owner.
    #[test]
    fn duplicate_definitions_agree_on_hex() {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for &(name, hex) in COLOR_TABLE {
            if let Some(previous) = seen.insert(name, hex) {
                assert_eq!(previous, hex, "hex mismatch for duplicate color {name}");
            }
        }
    }

    #[test]
    fn every_category_member_resolves_to_a_hex() {
        for (category, members) in CATEGORY_MEMBERS {
            for member in *members {
                assert!(
                    lookup(member).is_some(),
                    "{member} in {category:?} has no hex entry"
                );
            }
        }
    }

    #[test]
    fn category_assignment_is_idempotent() {
        assert_eq!(category_of("teal"), category_of("teal"));
        assert_eq!(category_of("Teal"), SeasonCategory::WarmAutumn);
    }
}
