//! Common utilities shared across CLI commands.

use std::path::Path;

use anyhow::{Context, Result};

/// Re-encode raw image bytes (whatever format the API returned) as PNG.
pub fn save_png(bytes: &[u8], path: &Path) -> Result<()> {
    let img = image::load_from_memory(bytes).context("returned image could not be decoded")?;
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}

/// MIME type for an image path, by extension. Unknown extensions are
/// sent as PNG and left for the API to sort out.
pub fn mime_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}
