//! Drawing helpers for cover rendering.
//!
//! Every helper paints with fully opaque colors: imageproc writes pixels
//! directly (no compositing), so a translucent brush would punch alpha
//! holes into the finished PNG.

use ab_glyph::{FontRef, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Waveform bars across the lower band.
const BAR_COUNT: u32 = 24;

/// Title wraps to at most this many lines before ellipsizing.
const MAX_TITLE_LINES: usize = 3;

/// Fill the canvas with a vertical two-stop gradient.
pub(super) fn vertical_gradient(img: &mut RgbaImage, top: [u8; 3], bottom: [u8; 3]) {
    let denom = img.height().saturating_sub(1).max(1) as f32;
    for (y, row) in img.enumerate_rows_mut() {
        let t = y as f32 / denom;
        let color = Rgba([
            lerp(top[0], bottom[0], t),
            lerp(top[1], bottom[1], t),
            lerp(top[2], bottom[2], t),
            255,
        ]);
        for (_x, _y, px) in row {
            *px = color;
        }
    }
}

/// Waveform motif: rounded bars whose heights derive from the title.
pub(super) fn waveform(img: &mut RgbaImage, title: &str, accent: [u8; 3]) {
    let s = img.width() as f32;
    let margin = s / 14.0;
    let band_top = s * 0.58;
    let band_bottom = s * 0.78;
    let band_mid = (band_top + band_bottom) / 2.0;
    let max_half = (band_bottom - band_top) / 2.0;

    let color = lighten(accent, 0.45);
    let span = s - 2.0 * margin;
    let slot = span / BAR_COUNT as f32;
    let bar_w = (slot * 0.45).max(2.0);
    let seed = title_seed(title);

    for i in 0..BAR_COUNT {
        let amp = 0.25 + 0.75 * unit_noise(seed, i);
        let half = (max_half * amp).max(bar_w);
        let cx = margin + slot * (i as f32 + 0.5);
        let x = (cx - bar_w / 2.0) as i32;
        let y = (band_mid - half) as i32;
        let h = (half * 2.0) as u32;

        draw_filled_rect_mut(img, Rect::at(x, y).of_size(bar_w as u32, h), color);

        // Rounded ends
        let r = (bar_w / 2.0) as i32;
        draw_filled_circle_mut(img, (cx as i32, y), r, color);
        draw_filled_circle_mut(img, (cx as i32, y + h as i32), r, color);
    }
}

/// White disc with the episode number in the top-left corner.
pub(super) fn episode_badge(img: &mut RgbaImage, font: &FontRef, episode: u32, text: [u8; 3]) {
    let s = img.width() as f32;
    let margin = s / 14.0;
    let radius = s * 0.06;
    let cx = margin + radius;
    let cy = margin + radius;

    draw_filled_circle_mut(img, (cx as i32, cy as i32), radius as i32, WHITE);

    let label = format!("EP {episode}");
    let mut scale = PxScale::from(radius * 0.72);
    let (w, _) = text_size(scale, font, &label);
    // Three-digit episodes still have to fit inside the disc.
    if w as f32 > radius * 1.6 {
        scale = PxScale::from(scale.y * radius * 1.6 / w as f32);
    }

    let (w, h) = text_size(scale, font, &label);
    let x = cx - w as f32 / 2.0;
    let y = cy - h as f32 / 2.0;
    let color = Rgba([text[0], text[1], text[2], 255]);
    draw_text_mut(img, color, x as i32, y as i32, scale, font, &label);
}

/// Wrapped, centered episode title in the upper half.
pub(super) fn title_block(img: &mut RgbaImage, font: &FontRef, title: &str) {
    let s = img.width() as f32;
    let margin = s / 14.0;
    let max_width = (s - 2.0 * margin) as u32;

    let mut scale = s * 0.07;
    let min_scale = s * 0.045;
    let mut lines = wrap_lines(font, PxScale::from(scale), title, max_width);
    while lines.len() > MAX_TITLE_LINES && scale > min_scale {
        scale *= 0.85;
        lines = wrap_lines(font, PxScale::from(scale), title, max_width);
    }
    if lines.len() > MAX_TITLE_LINES {
        lines.truncate(MAX_TITLE_LINES);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }

    let px = PxScale::from(scale);
    let line_height = scale * 1.25;
    let mut y = s * 0.26;
    for line in &lines {
        let (w, _) = text_size(px, font, line);
        let x = (s - w as f32) / 2.0;
        draw_text_mut(img, WHITE, x as i32, y as i32, px, font, line);
        y += line_height;
    }
}

/// Show name, uppercased and centered above the bottom margin.
pub(super) fn footer(img: &mut RgbaImage, font: &FontRef, show_name: &str) {
    let s = img.width() as f32;
    let margin = s / 14.0;
    let label = show_name.to_uppercase();
    let scale = PxScale::from(s * 0.032);

    let (w, h) = text_size(scale, font, &label);
    let x = (s - w as f32) / 2.0;
    let y = s - margin - h as f32;
    draw_text_mut(img, WHITE, x as i32, y as i32, scale, font, &label);
}

/// Greedy word wrap against measured line widths.
fn wrap_lines(font: &FontRef, scale: PxScale, text: &str, max_width: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        let width = text_size(scale, font, &candidate).0 as u32;
        if !current.is_empty() && width > max_width {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[inline]
fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

/// Mix a color toward white by `t`.
#[inline]
fn lighten(c: [u8; 3], t: f32) -> Rgba<u8> {
    Rgba([lerp(c[0], 255, t), lerp(c[1], 255, t), lerp(c[2], 255, t), 255])
}

/// FNV-1a over the title bytes; the waveform's only entropy source.
#[inline]
fn title_seed(title: &str) -> u64 {
    title
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325, |h, b| {
            (h ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
        })
}

/// Deterministic value in [0, 1) for bar `i`.
#[inline]
fn unit_noise(seed: u64, i: u32) -> f32 {
    let mut x = seed ^ (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    (x % 1_000) as f32 / 1_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_stops() {
        let mut img = RgbaImage::new(4, 8);
        vertical_gradient(&mut img, [10, 20, 30], [110, 120, 130]);
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(0, 7).0, [110, 120, 130, 255]);
    }

    #[test]
    fn noise_is_deterministic_and_bounded() {
        let seed = title_seed("Catarata");
        for i in 0..BAR_COUNT {
            let a = unit_noise(seed, i);
            let b = unit_noise(seed, i);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a));
        }
    }

    #[test]
    fn different_titles_give_different_seeds() {
        assert_ne!(title_seed("Catarata"), title_seed("Glaucoma"));
    }
}
