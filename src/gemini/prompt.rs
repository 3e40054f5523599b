//! Prompt assembly for cover generation and editing.

use crate::catalog::Post;
use crate::catalog::style::style_for;

/// The post context (title + excerpt) is clamped to keep prompts focused.
const MAX_CONTEXT_CHARS: usize = 300;

/// Build the cover generation prompt for a post.
///
/// The category style table supplies the visual direction; the post
/// title and excerpt become the thematic context.
pub fn cover_prompt(post: &Post) -> String {
    let style = style_for(&post.category);
    let context = clamp_chars(
        &format!("{}. {}", post.title, post.excerpt),
        MAX_CONTEXT_CHARS,
    );

    format!(
        "Generate an image in 16:9 widescreen landscape format.\n\
         \n\
         Professional medical blog cover for an ophthalmology clinic:\n\
         Theme: {title}\n\
         Category: {category}\n\
         Style: {art}\n\
         Colors: {palette}\n\
         Mood: {mood}\n\
         Elements: {elements}\n\
         \n\
         Requirements:\n\
         - 16:9 widescreen landscape format\n\
         - High resolution professional quality\n\
         - Clean modern medical design\n\
         - NO text NO words NO letters\n\
         - Professional soft lighting\n\
         - Abstract symbolic representation\n\
         \n\
         Context: {context}\n\
         \n\
         Generate the visual image now.",
        title = post.title,
        category = post.category,
        art = style.art_direction,
        palette = style.palette,
        mood = style.mood,
        elements = style.elements,
    )
}

/// Augment a free-form edit instruction with the fixed constraints every
/// edited cover must keep.
pub fn edit_prompt(instruction: &str) -> String {
    format!(
        "{instruction}\n\
         \n\
         Maintain the original style and quality.\n\
         Keep 16:9 landscape format.\n\
         NO text or words in the image."
    )
}

/// Truncate on a character boundary.
fn clamp_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(category: &str) -> Post {
        Post {
            id: 22,
            slug: "cirurgia-refrativa".into(),
            title: "Cirurgia Refrativa: Mitos e Verdades".into(),
            excerpt: "O que esperar da cirurgia a laser.".into(),
            category: category.into(),
        }
    }

    #[test]
    fn prompt_carries_post_and_style() {
        let prompt = cover_prompt(&post("Tratamento"));
        assert!(prompt.contains("Cirurgia Refrativa"));
        assert!(prompt.contains("Category: Tratamento"));
        assert!(prompt.contains("professional blue tones"));
        assert!(prompt.contains("NO text NO words NO letters"));
    }

    #[test]
    fn unknown_category_uses_fallback_style() {
        let prompt = cover_prompt(&post("Novidades"));
        assert!(prompt.contains("emerald green tones"));
    }

    #[test]
    fn long_excerpts_are_clamped() {
        let mut p = post("Prevenção");
        p.excerpt = "á".repeat(600);
        let prompt = cover_prompt(&p);

        let context_line = prompt
            .lines()
            .find(|l| l.starts_with("Context: "))
            .unwrap();
        let context = context_line.trim_start_matches("Context: ");
        assert_eq!(context.chars().count(), MAX_CONTEXT_CHARS);
    }

    #[test]
    fn edit_prompt_appends_constraints() {
        let prompt = edit_prompt("Add a warm sunset glow");
        assert!(prompt.starts_with("Add a warm sunset glow"));
        assert!(prompt.contains("Keep 16:9 landscape format."));
    }
}
