//! In-memory disc catalog and its TOML/JSON document form

use crate::disc::{Disc, DiscType};
use crate::error::{Result, VideoshopError};
use crate::io;
use crate::product::Money;
use crate::types::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Document format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// `.toml` files are TOML, anything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => CatalogFormat::Toml,
            _ => CatalogFormat::Json,
        }
    }
}

/// Ordered collection of discs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    discs: Vec<Disc>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a disc, returning its id
    pub fn add(&mut self, disc: Disc) -> ProductId {
        let id = disc.id();
        self.discs.push(disc);
        id
    }

    pub fn get(&self, id: &ProductId) -> Option<&Disc> {
        self.discs.iter().find(|d| d.id() == *id)
    }

    pub fn get_mut(&mut self, id: &ProductId) -> Option<&mut Disc> {
        self.discs.iter_mut().find(|d| d.id() == *id)
    }

    /// First disc whose name matches exactly
    pub fn find_by_name(&self, name: &str) -> Option<&Disc> {
        self.discs.iter().find(|d| d.name() == name)
    }

    /// Resolve a disc reference given as a product id or an exact name
    pub fn resolve_mut(&mut self, reference: &str) -> Result<&mut Disc> {
        let not_found = || VideoshopError::DiscNotFound(reference.to_string());

        let id = match ProductId::from_string(reference) {
            Ok(id) => id,
            Err(_) => self
                .find_by_name(reference)
                .map(Disc::id)
                .ok_or_else(not_found)?,
        };

        self.get_mut(&id).ok_or_else(not_found)
    }

    /// Discs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Disc> {
        self.discs.iter()
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Total number of comments across all discs
    pub fn comment_count(&self) -> usize {
        self.discs.iter().map(Disc::comment_count).sum()
    }

    /// Parse a catalog document in TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a catalog document in JSON
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize in the given format
    pub fn to_string_as(&self, format: CatalogFormat) -> Result<String> {
        match format {
            CatalogFormat::Toml => self.to_toml_string(),
            CatalogFormat::Json => self.to_json_string(),
        }
    }

    /// Load a catalog file; the format follows the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            VideoshopError::from(e).with_context(format!("Failed to read {}", path.display()))
        })?;

        let catalog = match CatalogFormat::from_path(path) {
            CatalogFormat::Toml => Self::from_toml_str(&content),
            CatalogFormat::Json => Self::from_json_str(&content),
        }
        .map_err(|e| e.with_context(format!("Failed to parse {}", path.display())))?;

        info!(
            "Loaded {} discs with {} comments from {:?}",
            catalog.len(),
            catalog.comment_count(),
            path
        );
        Ok(catalog)
    }

    /// Save the catalog, replacing `path` atomically.
    ///
    /// Each disc is written together with its comments.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_string_as(CatalogFormat::from_path(path))?;

        io::write_atomic(path, &content)?;

        debug!("Saved catalog with {} discs to {:?}", self.len(), path);
        Ok(())
    }

    /// The shop's initial stock of DVDs and Blu-rays
    pub fn sample() -> Self {
        let euros = |cents: i64| Money::euros(Decimal::new(cents, 2));

        let entries = [
            ("Last Action Hero", "lac", 999, "Äktschn/Comedy", DiscType::Dvd),
            ("Back to the Future", "bttf", 999, "Sci-Fi", DiscType::Dvd),
            ("Fido", "fido", 999, "Comedy/Drama/Horror", DiscType::Dvd),
            ("Super Fuzz", "sf", 999, "Action/Sci-Fi/Comedy", DiscType::Dvd),
            (
                "Armour of God II: Operation Condor",
                "aog2oc",
                1499,
                "Action/Adventure/Comedy",
                DiscType::Dvd,
            ),
            ("Persepolis", "pers", 1499, "Animation/Biography/Drama", DiscType::Dvd),
            (
                "Hot Shots! Part Deux",
                "hspd",
                999_900,
                "Action/Comedy/War",
                DiscType::Dvd,
            ),
            (
                "Avatar: The Last Airbender",
                "tla",
                1999,
                "Animation/Action/Adventure",
                DiscType::Dvd,
            ),
            (
                "Ghost in the Shell",
                "gits",
                999,
                "Animation/Action/Sci-Fi",
                DiscType::BluRay,
            ),
            (
                "Ghost in the Shell 2.0",
                "gits2",
                999,
                "Animation/Action/Sci-Fi",
                DiscType::BluRay,
            ),
            (
                "Ghost in the Shell: Stand Alone Complex",
                "gitssac",
                2999,
                "Animation/Action/Crime",
                DiscType::BluRay,
            ),
            (
                "Ghost in the Shell: Innocence",
                "gitsi",
                1999,
                "Animation/Action/Sci-Fi",
                DiscType::BluRay,
            ),
            ("Akira", "akira", 1999, "Animation/Action/Sci-Fi", DiscType::BluRay),
        ];

        let mut catalog = Self::new();
        for (name, image, cents, genre, disc_type) in entries {
            catalog.add(Disc::new(name, image, euros(cents), genre, disc_type));
        }
        catalog
    }
}
