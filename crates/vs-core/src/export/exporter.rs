//! Exporter trait and manager

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::{Result, VideoshopError};
use crate::io;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Trait for catalog exporters
pub trait Exporter: Send + Sync {
    /// Export a catalog to string
    fn export(&self, catalog: &Catalog) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a manager whose default exporters follow `config`
    pub fn with_config(config: &Config) -> Self {
        let include_comments = config.export.include_comments;

        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(
            super::json::JsonExporter::pretty().with_comments(include_comments),
        ));
        manager.register(Box::new(
            super::json::JsonExporter::compact().with_comments(include_comments),
        ));
        manager.register(Box::new(
            super::markdown::MarkdownExporter::new()
                .with_comments(include_comments)
                .with_max_rating(config.rating.max_rating),
        ));

        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export a catalog to the specified format
    pub fn export(&self, catalog: &Catalog, format: &str) -> Result<String> {
        self.get(format)
            .ok_or_else(|| VideoshopError::Validation(format!("Unknown export format: {}", format)))?
            .export(catalog)
    }

    /// Export a catalog to a file
    pub fn export_to_file(&self, catalog: &Catalog, format: &str, path: &Path) -> Result<()> {
        let exporter = self.get(format).ok_or_else(|| {
            VideoshopError::Validation(format!("Unknown export format: {}", format))
        })?;
        let content = exporter.export(catalog)?;

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        io::write_atomic(&final_path, &content)?;
        debug!("Exported catalog as {} to {:?}", format, final_path);
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
