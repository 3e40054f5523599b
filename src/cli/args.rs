//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Coverkit media toolkit CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: coverkit.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Knock a near-white background out to transparency
    #[command(visible_alias = "x")]
    Cutout {
        /// Source image (PNG/JPEG/WebP)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Destination PNG
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Per-channel background cutoff (0-255, config default otherwise)
        threshold: Option<u8>,
    },

    /// Draw a podcast cover from primitives and text
    #[command(visible_alias = "c")]
    Cover {
        #[command(flatten)]
        args: CoverArgs,
    },

    /// Generate blog covers through the Gemini API
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Edit an existing image with a natural-language instruction
    #[command(visible_alias = "e")]
    Edit {
        #[command(flatten)]
        args: EditArgs,
    },

    /// List the post catalog
    #[command(visible_alias = "p")]
    Posts {
        /// Only posts in this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Cover command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CoverArgs {
    /// Episode title
    #[arg(short, long)]
    pub title: String,

    /// Episode number for the badge
    #[arg(short, long)]
    pub episode: Option<u32>,

    /// Category driving the color palette
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output file (default: <output dir>/<slug>_cover.png)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Font file override (otherwise [cover] font from config)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub font: Option<PathBuf>,
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub selection: Selection,

    /// Model alias override: gemini-flash or gemini-pro
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Which posts to generate covers for (exactly one).
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct Selection {
    /// A single post id
    #[arg(long)]
    pub post: Option<u32>,

    /// Every post in a category
    #[arg(long)]
    pub category: Option<String>,

    /// Every post in the catalog
    #[arg(long)]
    pub all: bool,
}

/// Edit command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct EditArgs {
    /// Image to edit
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub image: PathBuf,

    /// Natural-language edit instruction
    #[arg(short, long)]
    pub instruction: String,

    /// Post id used in the output filename
    #[arg(long)]
    pub post: Option<u32>,
}
