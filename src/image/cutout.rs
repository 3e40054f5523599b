//! White-background transparency filter.
//!
//! Classifies a pixel as background iff every color channel exceeds the
//! threshold (strict `>`), then knocks those pixels out to alpha 0 while
//! forcing everything else fully opaque. RGB values are never touched,
//! so the cutout stays color-safe for consumers that ignore alpha.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use rayon::prelude::*;

/// Below this pixel count the parallel pass costs more than it saves.
const PARALLEL_PIXEL_THRESHOLD: usize = 32 * 1024;

/// Cut the background out of an image file and write PNG output.
pub fn cutout_file(input: &Path, output: &Path, threshold: u8) -> Result<()> {
    let img = image::open(input)
        .with_context(|| format!("failed to decode image `{}`", input.display()))?;
    let processed = apply(&img, threshold);

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }

    DynamicImage::ImageRgba8(processed)
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("failed to encode PNG `{}`", output.display()))?;
    Ok(())
}

/// Apply the transparency filter, normalizing any input to 8-bit RGBA.
///
/// Pure transform: a single pass over the pixel buffer, parallel for
/// large images.
pub fn apply(img: &DynamicImage, threshold: u8) -> RgbaImage {
    let mut out = img.to_rgba8();
    let pixels = out.width() as usize * out.height() as usize;

    let raw: &mut [u8] = &mut out;
    if pixels >= PARALLEL_PIXEL_THRESHOLD {
        raw.par_chunks_exact_mut(4)
            .for_each(|px| classify(px, threshold));
    } else {
        for px in raw.chunks_exact_mut(4) {
            classify(px, threshold);
        }
    }

    out
}

/// Background iff R, G and B all exceed the threshold; alpha plays no
/// part in the decision and is overwritten either way.
#[inline]
fn classify(px: &mut [u8], threshold: u8) {
    px[3] = if px[0] > threshold && px[1] > threshold && px[2] > threshold {
        0
    } else {
        255
    };
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    use super::*;

    fn rgba(pixels: &[[u8; 4]]) -> DynamicImage {
        let mut img = RgbaImage::new(pixels.len() as u32, 1);
        for (x, px) in pixels.iter().enumerate() {
            img.put_pixel(x as u32, 0, Rgba(*px));
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn white_becomes_transparent_dark_stays_opaque() {
        let img = rgba(&[[255, 255, 255, 255], [10, 10, 10, 255]]);
        let out = apply(&img, 240);

        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(out.get_pixel(1, 0).0, [10, 10, 10, 255]);
    }

    #[test]
    fn one_dark_channel_keeps_the_pixel() {
        // Red and green above the cutoff, blue below: not background.
        let img = rgba(&[[250, 250, 12, 255]]);
        let out = apply(&img, 240);
        assert_eq!(out.get_pixel(0, 0).0, [250, 250, 12, 255]);
    }

    #[test]
    fn boundary_equal_to_threshold_is_kept() {
        let img = rgba(&[[240, 240, 240, 255], [241, 241, 241, 255]]);
        let out = apply(&img, 240);

        assert_eq!(out.get_pixel(0, 0)[3], 255);
        assert_eq!(out.get_pixel(1, 0)[3], 0);
    }

    #[test]
    fn max_threshold_keeps_everything() {
        let img = rgba(&[[255, 255, 255, 255]]);
        let out = apply(&img, 255);
        assert_eq!(out.get_pixel(0, 0)[3], 255);
    }

    #[test]
    fn opaque_output_discards_source_alpha() {
        // A kept pixel comes out fully opaque even if it arrived translucent.
        let img = rgba(&[[10, 10, 10, 7]]);
        let out = apply(&img, 240);
        assert_eq!(out.get_pixel(0, 0).0, [10, 10, 10, 255]);
    }

    #[test]
    fn three_channel_input_gains_alpha() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 1, Rgb([5, 5, 5]));

        let out = apply(&DynamicImage::ImageRgb8(img), 240);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn dimensions_are_preserved() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(37, 19));
        let out = apply(&img, 240);
        assert_eq!(out.dimensions(), (37, 19));
    }

    #[test]
    fn filter_is_idempotent() {
        let img = rgba(&[
            [255, 255, 255, 255],
            [240, 240, 240, 255],
            [250, 10, 250, 128],
            [0, 0, 0, 0],
        ]);

        let once = apply(&img, 240);
        let twice = apply(&DynamicImage::ImageRgba8(once.clone()), 240);
        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn large_image_parallel_path_matches_semantics() {
        // 256x256 crosses the parallel cutoff.
        let mut img = RgbaImage::from_pixel(256, 256, Rgba([255, 255, 255, 255]));
        img.put_pixel(128, 128, Rgba([20, 20, 20, 255]));

        let out = apply(&DynamicImage::ImageRgba8(img), 240);
        assert_eq!(out.get_pixel(0, 0)[3], 0);
        assert_eq!(out.get_pixel(128, 128).0, [20, 20, 20, 255]);
    }

    #[test]
    fn cutout_file_writes_png_with_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("nested/out.png");

        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([10, 10, 10, 255]));
        img.save(&input).unwrap();

        cutout_file(&input, &output, 240).unwrap();

        let reread = image::open(&output).unwrap().to_rgba8();
        assert_eq!(reread.get_pixel(0, 0).0, [255, 255, 255, 0]);
        assert_eq!(reread.get_pixel(1, 0).0, [10, 10, 10, 255]);
    }

    #[test]
    fn unreadable_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let output = dir.path().join("out.png");
        assert!(cutout_file(&missing, &output, 240).is_err());
    }
}
