//! Procedural podcast cover rendering.
//!
//! Covers are drawn entirely from 2D primitives plus text: a vertical
//! gradient in the category palette, a waveform motif derived from the
//! episode title, an episode badge, the wrapped title, and the show
//! name footer. Rendering is deterministic - the same spec always
//! produces the same pixels.

mod draw;

use std::fs;
use std::path::Path;

use ab_glyph::FontRef;
use anyhow::{Context, Result, anyhow};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::catalog::style::CategoryStyle;

/// Everything a cover render needs besides the font.
pub struct CoverSpec<'a> {
    pub title: &'a str,
    pub episode: Option<u32>,
    pub show_name: &'a str,
    /// Edge length in pixels; covers are square.
    pub size: u32,
}

/// Render a cover and write it as PNG.
pub fn render_to_file(
    spec: &CoverSpec,
    style: &CategoryStyle,
    font_path: &Path,
    output: &Path,
) -> Result<()> {
    let font_bytes = fs::read(font_path)
        .with_context(|| format!("failed to read font `{}`", font_path.display()))?;
    let font = FontRef::try_from_slice(&font_bytes)
        .map_err(|_| anyhow!("`{}` is not a usable TTF/OTF font", font_path.display()))?;

    let cover = render(spec, style, &font);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    DynamicImage::ImageRgba8(cover)
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("failed to encode PNG `{}`", output.display()))?;
    Ok(())
}

/// Render a cover into a fresh RGBA buffer.
pub fn render(spec: &CoverSpec, style: &CategoryStyle, font: &FontRef) -> RgbaImage {
    let size = spec.size;
    let mut img = RgbaImage::new(size, size);

    draw::vertical_gradient(&mut img, style.accent, style.accent_dark);
    draw::waveform(&mut img, spec.title, style.accent);

    if let Some(episode) = spec.episode {
        draw::episode_badge(&mut img, font, episode, style.accent_dark);
    }
    draw::title_block(&mut img, font, spec.title);
    draw::footer(&mut img, font, spec.show_name);

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::style::style_for;

    // DejaVu ships with most Linux images; skip quietly where absent so
    // the suite stays hermetic.
    const FONT_CANDIDATES: [&str; 2] = [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
    ];

    fn load_font() -> Option<Vec<u8>> {
        FONT_CANDIDATES.iter().find_map(|p| fs::read(p).ok())
    }

    #[test]
    fn render_is_square_and_deterministic() {
        let Some(bytes) = load_font() else { return };
        let font = FontRef::try_from_slice(&bytes).unwrap();

        let spec = CoverSpec {
            title: "Catarata: Sintomas e Cirurgia",
            episode: Some(7),
            show_name: "Saraiva Vision",
            size: 400,
        };
        let style = style_for("Tratamento");

        let a = render(&spec, style, &font);
        let b = render(&spec, style, &font);
        assert_eq!(a.dimensions(), (400, 400));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn background_uses_category_palette() {
        let Some(bytes) = load_font() else { return };
        let font = FontRef::try_from_slice(&bytes).unwrap();

        let spec = CoverSpec {
            title: "Glaucoma",
            episode: None,
            show_name: "Saraiva Vision",
            size: 300,
        };
        let style = style_for("Prevenção");
        let img = render(&spec, style, &font);

        // Top-right corner is clear of badge/text and shows the gradient top.
        let corner = img.get_pixel(299, 0).0;
        assert_eq!(&corner[..3], &style.accent);
        assert_eq!(corner[3], 255);
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let spec = CoverSpec {
            title: "t",
            episode: None,
            show_name: "s",
            size: 300,
        };
        let result = render_to_file(
            &spec,
            style_for("Prevenção"),
            Path::new("/nonexistent/font.ttf"),
            &dir.path().join("out.png"),
        );
        assert!(result.is_err());
    }
}
