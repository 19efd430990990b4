//! Export command
//!
//! Export a catalog to various formats.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use vs_core::config::Config;
use vs_core::export::ExportManager;
use vs_core::Catalog;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Markdown report
    Markdown,
}

impl ExportFormat {
    fn name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonCompact => "json-compact",
            ExportFormat::Markdown => "markdown",
        }
    }
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Catalog file (.toml or .json)
    pub catalog: PathBuf,

    /// Export format (defaults to export.default_format)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    let catalog = Catalog::load(&args.catalog)
        .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;

    let format_name = args
        .format
        .map(|f| f.name())
        .unwrap_or(config.export.default_format.as_str());

    let export_manager = ExportManager::with_config(config);

    if let Some(output_path) = args.output {
        export_manager
            .export_to_file(&catalog, format_name, &output_path)
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        eprintln!(
            "{} Exported {} discs to {}",
            "✓".green(),
            catalog.len(),
            output_path.display()
        );
    } else {
        let output = export_manager.export(&catalog, format_name)?;
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_core::config::EXPORT_FORMATS;

    #[test]
    fn test_export_format_values() {
        assert!(ExportFormat::from_str("json", true).is_ok());
        assert!(ExportFormat::from_str("json-compact", true).is_ok());
        assert!(ExportFormat::from_str("markdown", true).is_ok());
        assert!(ExportFormat::from_str("pdf", true).is_err());
    }

    #[test]
    fn test_export_format_names_known_to_core() {
        for format in ExportFormat::value_variants() {
            assert!(EXPORT_FORMATS.contains(&format.name()));
        }
    }
}
