//! `edit` command - conversational image editing through Gemini.

use std::fs;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::cli::EditArgs;
use crate::cli::common::{mime_for, save_png};
use crate::config::Config;
use crate::gemini::{GeminiClient, Model, edit_prompt};
use crate::utils::date::DateTimeUtc;
use crate::utils::plural::plural_count;
use crate::{debug, log};

pub fn run(args: &EditArgs, config: &Config) -> Result<()> {
    let api_key = config.require_api_key()?;
    let model: Model = config.generate.model.parse()?;

    let bytes = fs::read(&args.image)
        .with_context(|| format!("failed to read `{}`", args.image.display()))?;
    let mime = mime_for(&args.image);

    let client = GeminiClient::new(
        api_key,
        model,
        config.generate.attempts,
        Duration::from_secs(config.generate.retry_delay_secs),
    )?;

    log!("edit"; "editing {} ({})", args.image.display(), mime);
    let instruction = edit_prompt(&args.instruction);
    let output = client.edit(&bytes, mime, &instruction)?;

    for text in &output.commentary {
        debug!("edit"; "model: {}", text.trim());
    }
    if output.images.is_empty() {
        bail!("the model returned no image, only text");
    }

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    let stamp = DateTimeUtc::now().compact();
    let post_id = args.post.unwrap_or(0);
    for (idx, bytes) in output.images.iter().enumerate() {
        let filename = if output.images.len() == 1 {
            format!("post_{post_id}_edit_{stamp}.png")
        } else {
            format!("post_{post_id}_edit_{stamp}_{}.png", idx + 1)
        };
        let path = output_dir.join(filename);
        save_png(bytes, &path)?;
        log!("edit"; "wrote {}", path.display());
    }

    log!("edit"; "{} saved to {}", plural_count(output.images.len(), "image"), output_dir.display());
    Ok(())
}
