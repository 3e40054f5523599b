//! `cutout` command - white-background transparency.

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::log;

pub fn run(input: &Path, output: &Path, threshold: Option<u8>, config: &Config) -> Result<()> {
    let threshold = threshold.unwrap_or(config.cutout.threshold);
    crate::image::cutout::cutout_file(input, output, threshold)?;
    log!("cutout"; "{} -> {} (threshold {})", input.display(), output.display(), threshold);
    Ok(())
}
