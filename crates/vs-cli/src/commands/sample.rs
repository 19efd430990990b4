//! Sample command
//!
//! Write the shop's initial stock of discs as a catalog document.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use vs_core::catalog::CatalogFormat;
use vs_core::Catalog;

/// Catalog document format for stdout
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocumentFormat {
    Toml,
    Json,
}

/// Arguments for the sample command
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Output file; its extension picks the format (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Format when writing to stdout
    #[arg(long, short, value_enum, default_value = "toml")]
    pub format: DocumentFormat,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the sample command
pub fn execute(args: SampleArgs) -> Result<()> {
    let catalog = Catalog::sample();

    match args.output {
        Some(path) => {
            if path.exists() && !args.force {
                anyhow::bail!(
                    "{} already exists. Use --force to overwrite.",
                    path.display()
                );
            }
            catalog
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} Wrote {} discs to {}",
                "✓".green(),
                catalog.len(),
                path.display()
            );
        }
        None => {
            let format = match args.format {
                DocumentFormat::Toml => CatalogFormat::Toml,
                DocumentFormat::Json => CatalogFormat::Json,
            };
            print!("{}", catalog.to_string_as(format)?);
        }
    }

    Ok(())
}
