//! Visual style per post category.
//!
//! One table drives both the Gemini prompt wording and the procedural
//! cover palette, so generated and drawn artwork stay on brand per
//! category. Category names match the catalog verbatim (Portuguese).

/// Visual direction for one category.
#[derive(Debug)]
pub struct CategoryStyle {
    /// Catalog category name this style applies to.
    pub category: &'static str,
    /// Color description for prompts.
    pub palette: &'static str,
    /// Mood keywords for prompts.
    pub mood: &'static str,
    /// Symbolic elements for prompts.
    pub elements: &'static str,
    /// Artistic direction for prompts.
    pub art_direction: &'static str,
    /// Gradient top color for drawn covers.
    pub accent: [u8; 3],
    /// Gradient bottom color for drawn covers.
    pub accent_dark: [u8; 3],
}

/// Style table, one entry per blog category.
///
/// The first entry doubles as the fallback for unknown categories.
pub static CATEGORY_STYLES: [CategoryStyle; 4] = [
    CategoryStyle {
        category: "Prevenção",
        palette: "emerald green tones and clean white",
        mood: "trustworthy, professional, preventive",
        elements: "protective shield over an eye symbol, caring hands, health cross",
        art_direction: "modern medical photography with abstract symbolism",
        accent: [0x10, 0xB9, 0x81],
        accent_dark: [0x06, 0x5F, 0x46],
    },
    CategoryStyle {
        category: "Tratamento",
        palette: "professional blue tones conveying science and precision",
        mood: "scientific, precise, therapeutic",
        elements: "medical instruments, precision tools, healing symbols",
        art_direction: "high-tech clinical photography, clean and modern",
        accent: [0x3B, 0x82, 0xF6],
        accent_dark: [0x1E, 0x3A, 0x8A],
    },
    CategoryStyle {
        category: "Tecnologia",
        palette: "futuristic purple and cyan gradients with neon accents",
        mood: "innovative, futuristic, cutting-edge",
        elements: "AI neural networks, digital eye scans, holographic interfaces",
        art_direction: "3D rendered scene with volumetric lighting",
        accent: [0x8B, 0x5C, 0xF6],
        accent_dark: [0x31, 0x2E, 0x81],
    },
    CategoryStyle {
        category: "Dúvidas Frequentes",
        palette: "warm amber and golden yellow tones",
        mood: "educational, accessible, informative",
        elements: "question marks, dialogue bubbles, educational symbols",
        art_direction: "modern flat illustration, friendly and professional",
        accent: [0xF5, 0x9E, 0x0B],
        accent_dark: [0x92, 0x40, 0x0E],
    },
];

/// Style for a category, falling back to the first entry.
pub fn style_for(category: &str) -> &'static CategoryStyle {
    CATEGORY_STYLES
        .iter()
        .find(|s| s.category == category)
        .unwrap_or(&CATEGORY_STYLES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_matches() {
        assert_eq!(style_for("Tecnologia").accent, [0x8B, 0x5C, 0xF6]);
    }

    #[test]
    fn unknown_category_falls_back_to_first() {
        let fallback = style_for("Oftalmopediatria");
        assert_eq!(fallback.category, CATEGORY_STYLES[0].category);
    }
}
