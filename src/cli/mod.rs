//! Command-line interface.

mod args;
pub mod common;
pub mod cover;
pub mod cutout;
pub mod edit;
pub mod generate;
pub mod posts;

pub use args::{Cli, Commands, CoverArgs, EditArgs, GenerateArgs, Selection};
