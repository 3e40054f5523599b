//! `posts` command - list the post catalog.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::catalog::{Catalog, Post};
use crate::config::Config;
use crate::utils::plural::plural_count;

pub fn run(category: Option<&str>, config: &Config) -> Result<()> {
    let catalog = Catalog::load(&config.posts_path())?;
    let posts: Vec<&Post> = match category {
        Some(c) => catalog.in_category(c),
        None => catalog.posts().iter().collect(),
    };

    for post in &posts {
        // Pad before styling so ANSI codes don't break the columns.
        let category = format!("{:<20}", post.category);
        println!("{:>4}  {}  {}", post.id, category.dimmed(), post.title);
    }
    println!("\n{}", plural_count(posts.len(), "post"));
    Ok(())
}
