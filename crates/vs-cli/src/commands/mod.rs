//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod add;
pub mod comment;
pub mod config;
pub mod export;
pub mod sample;
pub mod show;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use vs_core::config::Config;

/// videoshop - DVD and Blu-ray catalog with rated comments
#[derive(Debug, Parser)]
#[command(name = "videoshop")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VIDEOSHOP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the discs of a catalog with their ratings
    Show(show::ShowArgs),

    /// Add a disc to a catalog
    Add(add::AddArgs),

    /// Add a rated comment to a disc
    Comment(comment::CommentArgs),

    /// Export a catalog
    Export(export::ExportArgs),

    /// Write the shop's initial catalog
    Sample(sample::SampleArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    // Dispatch to command handler
    match cli.command {
        Commands::Show(args) => show::execute(args, &load_config(&config_path)?),
        Commands::Add(args) => add::execute(args, &load_config(&config_path)?),
        Commands::Comment(args) => comment::execute(args, &load_config(&config_path)?),
        Commands::Export(args) => export::execute(args, &load_config(&config_path)?),
        Commands::Sample(args) => sample::execute(args),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    Config::load_or_default(path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
