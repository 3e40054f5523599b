//! `generate` command - Gemini cover generation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::catalog::{Catalog, Post};
use crate::cli::GenerateArgs;
use crate::cli::common::save_png;
use crate::config::Config;
use crate::gemini::{GeminiClient, Model, cover_prompt};
use crate::logger::ProgressLine;
use crate::utils::date::DateTimeUtc;
use crate::utils::plural::plural_count;
use crate::{debug, log};

pub fn run(args: &GenerateArgs, config: &Config) -> Result<()> {
    let api_key = config.require_api_key()?;
    let model: Model = args
        .model
        .as_deref()
        .unwrap_or(&config.generate.model)
        .parse()?;

    let catalog = Catalog::load(&config.posts_path())?;
    let selected = select_posts(&catalog, args)?;

    let client = GeminiClient::new(
        api_key,
        model,
        config.generate.attempts,
        Duration::from_secs(config.generate.retry_delay_secs),
    )?;
    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create `{}`", output_dir.display()))?;

    log!("generate"; "requesting {} with {}", plural_count(selected.len(), "cover"), model.id());
    let progress = ProgressLine::new("covers", selected.len());

    let mut written = 0usize;
    let mut failed = 0usize;
    for post in &selected {
        match generate_one(&client, post, &output_dir) {
            Ok(count) if count > 0 => written += count,
            Ok(_) => {
                failed += 1;
                log!("warning"; "post {} produced no image, only model text", post.id);
            }
            Err(e) => {
                failed += 1;
                log!("error"; "post {}: {e:#}", post.id);
            }
        }
        progress.inc();
    }
    progress.finish();

    log!("generate"; "wrote {} to {}", plural_count(written, "cover"), output_dir.display());
    if failed > 0 {
        log!("warning"; "{} failed", plural_count(failed, "post"));
    }
    Ok(())
}

/// Generate and save covers for one post. Returns the number written.
fn generate_one(client: &GeminiClient, post: &Post, output_dir: &Path) -> Result<usize> {
    let prompt = cover_prompt(post);
    debug!("generate"; "prompt for post {}:\n{}", post.id, prompt);

    let output = client.generate(&prompt)?;
    for text in &output.commentary {
        debug!("generate"; "model: {}", text.trim());
    }

    let stamp = DateTimeUtc::now().compact();
    for (idx, bytes) in output.images.iter().enumerate() {
        let filename = if output.images.len() == 1 {
            format!("post_{}_cover_{stamp}.png", post.id)
        } else {
            format!("post_{}_cover_{stamp}_{}.png", post.id, idx + 1)
        };
        let path = output_dir.join(filename);
        save_png(bytes, &path)?;
        debug!("generate"; "saved {}", path.display());
    }
    Ok(output.images.len())
}

/// Resolve the CLI selection against the catalog.
fn select_posts<'a>(catalog: &'a Catalog, args: &GenerateArgs) -> Result<Vec<&'a Post>> {
    let selection = &args.selection;

    if let Some(id) = selection.post {
        let post = catalog
            .by_id(id)
            .with_context(|| format!("post id {id} not found in the catalog"))?;
        return Ok(vec![post]);
    }

    if let Some(category) = &selection.category {
        let posts = catalog.in_category(category);
        if posts.is_empty() {
            bail!("no posts in category `{category}`");
        }
        return Ok(posts);
    }

    if catalog.is_empty() {
        bail!("the post catalog is empty");
    }
    Ok(catalog.posts().iter().collect())
}
