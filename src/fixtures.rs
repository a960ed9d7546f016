//! Canned provider replies for offline development and pipeline tests.
//! One fixture per seasonal type in each reply style the providers have
//! produced in the wild, plus two degraded replies.

use rand::RngExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureKind {
    WarmAutumn,
    CoolWinter,
    SoftSummer,
    SoftSummerReal,
    BrightSpring,
    DeepAutumn,
    LightSpring,
    ErrorResponse,
    IncompleteResponse,
}

impl FixtureKind {
    pub const ALL: [FixtureKind; 9] = [
        FixtureKind::WarmAutumn,
        FixtureKind::CoolWinter,
        FixtureKind::SoftSummer,
        FixtureKind::SoftSummerReal,
        FixtureKind::BrightSpring,
        FixtureKind::DeepAutumn,
        FixtureKind::LightSpring,
        FixtureKind::ErrorResponse,
        FixtureKind::IncompleteResponse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FixtureKind::WarmAutumn => "warm_autumn",
            FixtureKind::CoolWinter => "cool_winter",
            FixtureKind::SoftSummer => "soft_summer",
            FixtureKind::SoftSummerReal => "soft_summer_real",
            FixtureKind::BrightSpring => "bright_spring",
            FixtureKind::DeepAutumn => "deep_autumn",
            FixtureKind::LightSpring => "light_spring",
            FixtureKind::ErrorResponse => "error_response",
            FixtureKind::IncompleteResponse => "incomplete_response",
        }
    }

    pub fn from_name(name: &str) -> Option<FixtureKind> {
        FixtureKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
    }

    /// Degraded fixtures exercise the pipeline's fallback behavior and are
    /// excluded from random selection.
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            FixtureKind::ErrorResponse | FixtureKind::IncompleteResponse
        )
    }

    pub fn random() -> FixtureKind {
        let candidates: Vec<FixtureKind> = FixtureKind::ALL
            .iter()
            .copied()
            .filter(|kind| !kind.is_degraded())
            .collect();
        let mut rng = rand::rng();
        candidates[rng.random_range(0..candidates.len())]
    }

    pub fn response_text(&self) -> &'static str {
        match self {
            FixtureKind::WarmAutumn => WARM_AUTUMN,
            FixtureKind::CoolWinter => COOL_WINTER,
            FixtureKind::SoftSummer => SOFT_SUMMER,
            FixtureKind::SoftSummerReal => SOFT_SUMMER_REAL,
            FixtureKind::BrightSpring => BRIGHT_SPRING,
            FixtureKind::DeepAutumn => DEEP_AUTUMN,
            FixtureKind::LightSpring => LIGHT_SPRING,
            FixtureKind::ErrorResponse => ERROR_RESPONSE,
            FixtureKind::IncompleteResponse => INCOMPLETE_RESPONSE,
        }
    }
}

// A provider reply in the structured JSON format the analysis prompt asks
// for.
const WARM_AUTUMN: &str = r##"{
  "seasonal_type": "Warm Autumn",
  "analysis": {
    "skin_tone": "Medium skin tone with golden undertones",
    "undertone": "Warm",
    "contrast": "Medium to High"
  },
  "recommendations": {
    "fashion_colors": {
      "best_colors_description": "Embrace earthy, rich, and warm colors. Think of the colors of a forest in autumn. Your best colors include camel, olive green, chocolate brown, warm gray, ivory, mustard yellow, burnt orange, rust, forest green, teal, and tomato red. These colors will enhance your natural warmth and create a harmonious look.",
      "color_palette_hex": ["#C19A6B", "#6B8E23", "#7B3F00", "#8B7355", "#FFFFF0", "#FFD700", "#CC5500", "#B7410E"]
    },
    "hair_color": "For hair color, consider warm browns with golden undertones, rich auburn or copper tones, golden blonde highlights, or deep chocolate brown. Avoid cool tones like ash blonde or platinum as they may clash with your warm undertones.",
    "makeup": {
      "foundation": "Choose a foundation that matches your medium skin tone with warm, golden undertones. Look for formulas that enhance your natural warmth.",
      "blush": "Opt for warm, peachy tones like peach blush with golden undertones, terracotta or coral shades, and warm rose colors. Avoid cool pinks or mauve tones.",
      "lipstick": "Choose warm, rich lip colors such as terracotta or brick red, warm coral or peach, rich brown-based nudes, and golden orange tones. Avoid cool pinks or blue-based reds.",
      "eyeshadow": "Select warm, earthy eye colors including golden browns and bronzes, warm taupe and camel, terracotta and rust tones, and forest green and olive. Avoid cool grays or silver tones."
    }
  },
  "final_encouragement": "Your Warm Autumn coloring is absolutely stunning! These rich, earthy tones will make you glow and bring out the natural warmth in your features. Remember, confidence is your best accessory!"
}"##;

// Markdown-style prose replies, one per season the old prompt produced.
const COOL_WINTER: &str = r##"Excellent! Let me analyze your skin tone and provide personalized color recommendations.

**Initial Observations:**

*   **Skin Tone:** Fair to Medium
*   **Undertone:** Cool, bluish undertone with pink or rosy tones
*   **Contrast:** High contrast between features
*   **Overall Type:** Cool Winter

**Here's why:**

*   **Cool Undertone:** Your skin has distinct cool, bluish undertones that are characteristic of Winter types
*   **High Contrast:** The strong contrast between your hair, skin, and eyes indicates a Winter classification
*   **Clarity:** Your features have a clear, crisp quality typical of Winter seasons

## **Color Recommendations for Cool Winter:**

### **Best Colors:**

**Jewel Tones:**
- Deep emerald green
- Royal blue
- Rich purple
- True red
- Hot pink

**Neutrals:**
- Pure white
- Charcoal gray
- Navy blue
- Black

**Accent Colors:**
- Silver metallics
- Icy blue
- Bright magenta
- Electric blue"##;

const SOFT_SUMMER: &str = r##"Let me analyze your skin tone and provide you with personalized color recommendations.

**Analysis Results:**

*   **Skin Tone:** Light to Medium
*   **Undertone:** Cool undertone with a muted, soft quality
*   **Contrast:** Low to medium contrast
*   **Overall Type:** Soft Summer

**Here's why:**

*   **Soft Quality:** Your features have a gentle, muted appearance rather than sharp contrast
*   **Cool Undertone:** Your skin has cool undertones but they're not as intense as Winter types
*   **Muted Colors:** You look best in colors that are softened and slightly grayed

## **Color Recommendations for Soft Summer:**

### **Best Colors:**

**Soft Neutrals:**
- Soft white
- Light gray
- Muted navy
- Dusty rose

**Muted Colors:**
- Lavender
- Sage green
- Dusty blue
- Mauve
- Soft teal

**Avoid:**
- Bright, pure colors
- High contrast combinations
- Warm oranges and yellows"##;

const BRIGHT_SPRING: &str = r##"Fantastic! Let me provide you with a comprehensive color analysis.

**Skin Tone Analysis:**

*   **Skin Tone:** Light to Medium
*   **Undertone:** Warm undertone with golden or peachy tones
*   **Contrast:** Medium to high contrast
*   **Overall Type:** Bright Spring

**Here's why:**

*   **Bright Quality:** Your features have a clear, bright appearance that can handle vivid colors
*   **Warm Undertone:** Your skin has warm undertones that complement spring colors
*   **Clarity:** You have enough contrast to wear bright, clear colors effectively

## **Color Recommendations for Bright Spring:**

### **Best Colors:**

**Bright Colors:**
- Coral
- Bright yellow
- Kelly green
- Bright blue
- Hot pink

**Neutrals:**
- Cream
- Light beige
- Warm white
- Light brown

**Accent Colors:**
- Gold metallics
- Bright orange
- Lime green
- Turquoise"##;

const DEEP_AUTUMN: &str = r##"Let me analyze your skin tone and provide detailed color recommendations.

**Analysis Results:**

*   **Skin Tone:** Medium to Deep
*   **Undertone:** Warm undertone with rich, deep qualities
*   **Contrast:** High contrast with deep, rich features
*   **Overall Type:** Deep Autumn

**Here's why:**

*   **Deep Quality:** Your features have a rich, deep appearance that can handle intense colors
*   **Warm Undertone:** Your skin has warm undertones that complement autumn colors
*   **Rich Contrast:** You have enough depth to wear rich, saturated colors effectively

## **Color Recommendations for Deep Autumn:**

### **Best Colors:**

**Rich Colors:**
- Deep burgundy
- Forest green
- Navy blue
- Chocolate brown
- Deep teal

**Neutrals:**
- Charcoal gray
- Deep brown
- Warm black
- Cream

**Accent Colors:**
- Gold metallics
- Deep orange
- Olive green
- Rich purple"##;

const LIGHT_SPRING: &str = r##"Let me provide you with a comprehensive skin tone analysis.

**Analysis Results:**

*   **Skin Tone:** Light
*   **Undertone:** Warm undertone with golden or peachy tones
*   **Contrast:** Low to medium contrast
*   **Overall Type:** Light Spring

**Here's why:**

*   **Light Quality:** Your features have a light, delicate appearance
*   **Warm Undertone:** Your skin has warm undertones that complement spring colors
*   **Soft Contrast:** You have gentle contrast that works well with light, bright colors

## **Color Recommendations for Light Spring:**

### **Best Colors:**

**Light Colors:**
- Peach
- Light yellow
- Mint green
- Sky blue
- Light pink

**Neutrals:**
- Ivory
- Light beige
- Warm white
- Light gray

**Accent Colors:**
- Gold metallics
- Light coral
- Soft lavender
- Light mint"##;

// A reply observed from a live session, kept for its free-prose structure
// and explicit disclaimer block.
const SOFT_SUMMER_REAL: &str = r##"Alright, let's dive into your personal color analysis! It's so exciting to see how understanding your natural coloring can enhance your features.

From the image you've provided, here's my initial assessment:

*   **Skin Tone:** Your skin appears to be fair to light.
*   **Undertone:** It seems like you might have a neutral to slightly cool undertone. I am seeing some subtle rosy or pinkish tones in your skin.
*   **Contrast:** Your contrast level (difference between hair, skin, and eyes) appears to be medium.

Based on these observations, I believe you might be a **Soft Summer**. Soft Summers have a muted, cool, and delicate appearance.

**Let's explore the Soft Summer palette in more detail:**

**Fashion Colors:**

Think of colors like those found on a cloudy, misty day. Soft, muted blues, greens, pinks, and purples will be your best friends. Avoid anything too bright or warm, as it can overwhelm your delicate coloring.

*   **Excellent choices:** Foggy gray-blue, dusty rose, lavender, seafoam green, muted teal.

**Hair Color:**

*   **Natural:** Your current hair color seems to be in the right range.
*   **Dyed:** If you're considering dyeing your hair, stick with cool-toned browns or blondes with ashy undertones. Avoid anything too warm (like golden or reddish tones) as it might clash with your skin.

**Makeup:**

*   **Foundation:** Look for a foundation that matches your fair skin tone with a neutral or slightly cool undertone.
*   **Blush:** Soft, muted pinks or mauves will give you a natural, healthy glow.
*   **Lipstick:** Think berry shades, rose-toned nudes, and muted pinks. A sheer or satin finish will look more harmonious than a matte one.
*   **Eyeshadow:** Soft, cool-toned browns, grays, and taupes will enhance your eyes without being too overpowering. A touch of lavender or dusty rose can also look beautiful.

Remember, this is just a starting point. The best way to confirm your season is through a live or virtual draping session where you can see how different colors interact with your skin in real-time.

Would you be interested in exploring other possibilities or going deeper into the Soft Summer palette? I'm here to help!

**Disclaimer:** This analysis is based solely on the provided image and may not be 100% accurate. A professional, in-person color analysis is always recommended for the most precise results.
It is important to use the best colors that flatter you, even if they are not in your season.
It is also important to keep in mind that color analysis is only a tool and should be used as a guide, not a strict set of rules."##;

const ERROR_RESPONSE: &str =
    "Error analyzing with Gemini: API rate limit exceeded. Please try again later.";

const INCOMPLETE_RESPONSE: &str = r##"I can see your image, but I'm having trouble analyzing the specific details.

The lighting in the image makes it difficult to determine the exact skin tone characteristics.

Please try uploading a photo with better lighting, preferably in natural daylight."##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in FixtureKind::ALL {
            assert_eq!(FixtureKind::from_name(kind.name()), Some(kind));
            assert!(!kind.response_text().is_empty());
        }
        assert_eq!(FixtureKind::from_name("surreal_spring"), None);
    }

    #[test]
    fn random_selection_skips_degraded_kinds() {
        for _ in 0..64 {
            assert!(!FixtureKind::random().is_degraded());
        }
    }

    #[test]
    fn warm_autumn_fixture_is_pure_json() {
        let value: serde_json::Value = serde_json::from_str(WARM_AUTUMN).unwrap();
        assert_eq!(value["seasonal_type"], "Warm Autumn");
    }
}
