//! Kebab-case slugs for generated filenames.

use deunicode::deunicode;

/// Slugify a title into a lowercase kebab-case filename stem.
///
/// Accented characters are transliterated to ASCII first, so
/// "Prevenção" becomes "prevencao" rather than being dropped.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // Suppress a leading dash

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_accents() {
        assert_eq!(slugify("Prevenção & Saúde"), "prevencao-saude");
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("Catarata:  Sintomas e Cirurgia"), "catarata-sintomas-e-cirurgia");
    }

    #[test]
    fn trims_edges() {
        assert_eq!(slugify("  óculos?  "), "oculos");
        assert_eq!(slugify(""), "");
    }
}
