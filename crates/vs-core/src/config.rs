//! Configuration management for videoshop

use crate::error::{Result, VideoshopError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Export formats known to the default export manager
pub const EXPORT_FORMATS: &[&str] = &["json", "json-compact", "markdown"];

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment rating settings
    pub rating: RatingConfig,
    /// Catalog settings
    pub catalog: CatalogConfig,
    /// Export settings
    pub export: ExportConfig,
}

impl Config {
    /// Default config location relative to the working directory
    pub fn default_path() -> PathBuf {
        PathBuf::from(".videoshop/config.toml")
    }

    /// Parse configuration from TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| VideoshopError::from(e).with_context(format!("{}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` if it exists, otherwise defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check settings for consistency
    pub fn validate(&self) -> Result<()> {
        if self.rating.min_rating > self.rating.max_rating {
            return Err(VideoshopError::Config(format!(
                "rating.min_rating ({}) is greater than rating.max_rating ({})",
                self.rating.min_rating, self.rating.max_rating
            )));
        }

        if self.rating.max_text_length == 0 {
            return Err(VideoshopError::Config(
                "rating.max_text_length must be positive".to_string(),
            ));
        }

        if !EXPORT_FORMATS.contains(&self.export.default_format.as_str()) {
            return Err(VideoshopError::Config(format!(
                "Unknown export.default_format '{}' (expected one of: {})",
                self.export.default_format,
                EXPORT_FORMATS.join(", ")
            )));
        }

        Ok(())
    }
}

/// Comment rating configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Lowest rating a comment may give
    pub min_rating: u32,
    /// Highest rating a comment may give
    pub max_rating: u32,
    /// Maximum comment text length in characters
    pub max_text_length: usize,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min_rating: 1,
            max_rating: 5,
            max_text_length: 2000,
        }
    }
}

/// Catalog-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Currency for prices given without one
    pub default_currency: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_currency: "EUR".to_string(),
        }
    }
}

/// Export-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub default_format: String,
    /// Include individual comments in exports
    pub include_comments: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
            include_comments: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.rating.min_rating, 1);
        assert_eq!(config.rating.max_rating, 5);
        assert_eq!(config.catalog.default_currency, "EUR");
        assert!(config.export.include_comments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[rating]"));
        assert!(toml.contains("[export]"));

        let config2 = Config::from_toml_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str("[rating]\nmax_rating = 10\n").unwrap();
        assert_eq!(config.rating.max_rating, 10);
        assert_eq!(config.rating.min_rating, 1);
        assert_eq!(config.export.default_format, "markdown");
    }

    #[test]
    fn test_invalid_rating_range() {
        let result = Config::from_toml_str("[rating]\nmin_rating = 6\n");
        assert!(matches!(result, Err(VideoshopError::Config(_))));
    }

    #[test]
    fn test_unknown_export_format() {
        let result = Config::from_toml_str("[export]\ndefault_format = \"pdf\"\n");
        assert!(matches!(result, Err(VideoshopError::Config(_))));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config, Config::default());

        fs::write(&path, "[catalog]\ndefault_currency = \"USD\"\n").unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.catalog.default_currency, "USD");
    }
}
