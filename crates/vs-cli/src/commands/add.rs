//! Add command
//!
//! Add a disc to a catalog file, creating the file when it does not exist.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use vs_core::config::Config;
use vs_core::{Catalog, Disc, DiscType, Money};

/// Arguments for the add command
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Catalog file (.toml or .json)
    pub catalog: PathBuf,

    /// Disc title
    #[arg(long, short)]
    pub name: String,

    /// Cover image key
    #[arg(long, short)]
    pub image: String,

    /// Genre, e.g. "Animation/Action"
    #[arg(long, short)]
    pub genre: String,

    /// Media type (dvd, bluray, blu-ray)
    #[arg(long = "type", short = 't')]
    pub disc_type: DiscType,

    /// Price as "9.99 EUR", "EUR 9.99" or a bare amount in the configured currency
    #[arg(long, short)]
    pub price: String,

    /// Write the updated catalog back to its file
    #[arg(long)]
    pub save: bool,
}

/// Execute the add command
pub fn execute(args: AddArgs, config: &Config) -> Result<()> {
    let price = Money::parse(&args.price, &config.catalog.default_currency)
        .context("Invalid price")?;

    let mut catalog = if args.catalog.exists() {
        Catalog::load(&args.catalog)
            .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?
    } else {
        Catalog::new()
    };

    let disc = Disc::new(args.name, args.image, price, args.genre, args.disc_type);
    println!(
        "{} Added {} '{}' at {} ({})",
        "✓".green(),
        disc.disc_type(),
        disc.name().bold(),
        disc.price().to_string().cyan(),
        disc.id().to_string().dimmed()
    );
    let id = catalog.add(disc);
    info!("Catalog now holds {} discs, added {}", catalog.len(), id);

    if args.save {
        catalog
            .save(&args.catalog)
            .with_context(|| format!("Failed to save catalog {}", args.catalog.display()))?;
        eprintln!("{} Saved {}", "✓".green(), args.catalog.display());
    } else {
        eprintln!(
            "{}",
            "Catalog not saved. Pass --save to keep the disc.".dimmed()
        );
    }

    Ok(())
}
