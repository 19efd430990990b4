//! Config command
//!
//! Manage videoshop configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;
use std::path::Path;

use vs_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    if !config_path.exists() {
        eprintln!(
            "{} No configuration at {}, showing defaults.",
            "⚠".yellow(),
            config_path.display()
        );
    }

    let config = Config::load_or_default(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    fs::write(config_path, Config::default().to_toml_string()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} Created {}", "✓".green(), config_path.display());
    Ok(())
}

fn validate_config(config_path: &Path) -> Result<()> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config = Config::from_toml_str(&content)?;

    // Keys serde would silently ignore
    let raw: toml::Value = toml::from_str(&content)?;
    let known: toml::Value = toml::Value::try_from(&config)?;
    let unknown = unknown_keys(&raw, &known, "");

    for key in &unknown {
        eprintln!("{} Unknown key: {}", "⚠".yellow(), key);
    }

    println!("{} Configuration is valid.", "✓".green());
    Ok(())
}

fn unknown_keys(raw: &toml::Value, known: &toml::Value, prefix: &str) -> Vec<String> {
    let (Some(raw), Some(known)) = (raw.as_table(), known.as_table()) else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in raw {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match known.get(key) {
            Some(known_value) => unknown.extend(unknown_keys(value, known_value, &path)),
            None => unknown.push(path),
        }
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_keys() {
        let raw: toml::Value =
            toml::from_str("[rating]\nmax_rating = 5\ncolour = 1\n[extra]\na = 1\n").unwrap();
        let known = toml::Value::try_from(Config::default()).unwrap();

        let mut unknown = unknown_keys(&raw, &known, "");
        unknown.sort();
        assert_eq!(unknown, vec!["extra", "rating.colour"]);
    }

    #[test]
    fn test_init_and_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        init_config(&path, false).unwrap();
        assert!(path.exists());
        assert!(init_config(&path, false).is_err());
        assert!(init_config(&path, true).is_ok());

        validate_config(&path).unwrap();
    }
}
