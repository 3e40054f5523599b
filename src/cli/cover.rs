//! `cover` command - procedural podcast cover rendering.

use anyhow::{Context, Result, bail};

use crate::catalog::style::style_for;
use crate::cli::CoverArgs;
use crate::config::Config;
use crate::image::cover::{CoverSpec, render_to_file};
use crate::log;
use crate::utils::slug::slugify;

pub fn run(args: &CoverArgs, config: &Config) -> Result<()> {
    let font_path = args
        .font
        .clone()
        .or_else(|| config.font_path())
        .context("no cover font configured: set [cover] font in coverkit.toml or pass --font")?;

    let style = style_for(args.category.as_deref().unwrap_or_default());

    let output = match &args.output {
        Some(path) => path.clone(),
        None => {
            let stem = slugify(&args.title);
            if stem.is_empty() {
                bail!("title produces an empty filename, pass --output explicitly");
            }
            config.output_dir().join(format!("{stem}_cover.png"))
        }
    };

    let spec = CoverSpec {
        title: &args.title,
        episode: args.episode,
        show_name: &config.cover.show_name,
        size: config.cover.size,
    };
    render_to_file(&spec, style, &font_path, &output)?;

    log!("cover"; "wrote {}", output.display());
    Ok(())
}
