//! Coverkit - cover image toolkit for the clinic blog and podcast.

mod catalog;
mod cli;
mod config;
mod gemini;
mod image;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Cutout {
            input,
            output,
            threshold,
        } => cli::cutout::run(input, output, *threshold, &config),
        Commands::Cover { args } => cli::cover::run(args, &config),
        Commands::Generate { args } => cli::generate::run(args, &config),
        Commands::Edit { args } => cli::edit::run(args, &config),
        Commands::Posts { category } => cli::posts::run(category.as_deref(), &config),
    }
}
