pub mod heuristic;
pub mod lexicon;
pub mod palette;
pub mod structured;
pub mod types;

pub use types::{CanonicalAnalysis, FashionColors};

/// Normalizes a raw provider reply into a canonical record.
///
/// Tries the embedded-JSON extractor first and falls back to the line
/// heuristic, then fills in the palette markup as the final step: an
/// explicit hex palette from the JSON payload wins, otherwise the palette
/// is derived from whichever color-guidance text the record carries.
/// Total for every input, including the empty string.
pub fn normalize(provider_text: &str) -> CanonicalAnalysis {
    let (mut record, hex_palette) = match structured::try_extract_json(provider_text) {
        Some((record, hex_palette)) => (record, hex_palette),
        None => (heuristic::extract(provider_text), Vec::new()),
    };

    record.fashion_colors_palette = if !hex_palette.is_empty() {
        palette::palette_from_hex(&hex_palette)
    } else {
        palette_markup_for(&record.fashion_colors)
    };

    record
}

/// Palette markup for either shape of color guidance; empty guidance
/// yields no markup.
pub fn palette_markup_for(colors: &FashionColors) -> String {
    let source = match colors {
        FashionColors::Flat(text) => text.as_str(),
        FashionColors::Structured(guidance) => guidance.excellent_choices.as_str(),
    };
    if source.is_empty() {
        return String::new();
    }
    let (_, markup) = palette::palette_from_text(source);
    markup
}
