//! Show command
//!
//! List the discs of a catalog with their ratings.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use vs_core::config::Config;
use vs_core::rating;
use vs_core::{Catalog, Disc, DiscType};

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Catalog file (.toml or .json)
    pub catalog: PathBuf,

    /// Print product IDs
    #[arg(long)]
    pub ids: bool,

    /// List every comment under its disc
    #[arg(long)]
    pub comments: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;

    if catalog.is_empty() {
        println!("{}", "Catalog is empty.".dimmed());
        return Ok(());
    }

    for disc in catalog.iter() {
        println!("{}", format_disc(disc, config.rating.max_rating, args.ids));

        if args.comments {
            for comment in disc.comments() {
                println!(
                    "    {} {} {}",
                    format!("[{}]", comment.rating).yellow(),
                    comment.text,
                    format!("({})", comment.author_or_anonymous()).dimmed()
                );
            }
        }
    }

    println!();
    println!(
        "{} discs, {} comments",
        catalog.len().to_string().cyan(),
        catalog.comment_count().to_string().yellow()
    );

    Ok(())
}

fn format_disc(disc: &Disc, max_rating: u32, with_id: bool) -> String {
    let kind = match disc.disc_type() {
        DiscType::Dvd => format!("{:<8}", disc.disc_type()).blue(),
        DiscType::BluRay => format!("{:<8}", disc.disc_type()).magenta(),
    };

    let rating = if disc.comment_count() == 0 {
        "not rated".dimmed().to_string()
    } else {
        format!(
            "{} {:.2} ({})",
            rating::stars(disc.overall_rating(), max_rating).yellow(),
            disc.overall_rating(),
            disc.comment_count()
        )
    };

    let id = if with_id {
        format!("{} ", disc.id().to_string().dimmed())
    } else {
        String::new()
    };

    format!(
        "{}{} {} {} {} {}",
        id,
        kind,
        disc.name().bold(),
        format!("[{}]", disc.genre()).dimmed(),
        disc.price().to_string().green(),
        rating
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::{Comment, Money};

    #[test]
    fn test_format_disc() {
        colored::control::set_override(false);

        let mut disc = Disc::new(
            "Fido",
            "fido",
            Money::parse("9.99 EUR", "EUR").unwrap(),
            "Comedy/Drama/Horror",
            DiscType::Dvd,
        );
        assert!(format_disc(&disc, 5, false).contains("not rated"));

        disc.add_comment(Comment::new("Zombies!", 4));
        let line = format_disc(&disc, 5, true);
        assert!(line.starts_with(&disc.id().to_string()));
        assert!(line.contains("Fido"));
        assert!(line.contains("9.99 EUR"));
        assert!(line.contains("★★★★☆ 4.00 (1)"));
    }
}
