//! Comment command
//!
//! Add a rated comment to a disc of a catalog file.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use vs_core::comment::{CommentBuilder, CommentValidator};
use vs_core::config::Config;
use vs_core::Catalog;

/// Arguments for the comment command
#[derive(Debug, Args)]
pub struct CommentArgs {
    /// Catalog file (.toml or .json)
    pub catalog: PathBuf,

    /// Disc to comment on (product ID or exact name)
    #[arg(long, short)]
    pub disc: String,

    /// Rating for the disc
    #[arg(long, short)]
    pub rating: u32,

    /// Comment text
    #[arg(long, short)]
    pub text: String,

    /// Author name
    #[arg(long, short)]
    pub author: Option<String>,

    /// Write the updated catalog back to its file
    #[arg(long)]
    pub save: bool,
}

/// Execute the comment command
pub fn execute(args: CommentArgs, config: &Config) -> Result<()> {
    let mut catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;

    let mut builder = CommentBuilder::new(args.text, args.rating)
        .validator(CommentValidator::from_config(&config.rating));
    if let Some(author) = args.author {
        builder = builder.author(author);
    }
    let comment = builder.build().context("Invalid comment")?;

    let disc = catalog.resolve_mut(&args.disc)?;
    disc.add_comment(comment);

    println!(
        "{} Rated '{}': {} ({} comments)",
        "✓".green(),
        disc.name().bold(),
        format!("{:.2}", disc.overall_rating()).yellow(),
        disc.comment_count()
    );
    info!("Disc {} now rated {}", disc.id(), disc.overall_rating());

    if args.save {
        catalog
            .save(&args.catalog)
            .with_context(|| format!("Failed to save catalog {}", args.catalog.display()))?;
        eprintln!("{} Saved {}", "✓".green(), args.catalog.display());
    } else {
        eprintln!(
            "{}",
            "Catalog not saved. Pass --save to keep the comment.".dimmed()
        );
    }

    Ok(())
}
