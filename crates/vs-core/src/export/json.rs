//! JSON exporter for catalogs

use super::exporter::Exporter;
use crate::catalog::Catalog;
use crate::comment::Comment;
use crate::disc::{Disc, DiscType};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version of the exported document layout
pub const EXPORT_VERSION: &str = "1.0";

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Whether to list individual comments
    include_comments: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            include_comments: true,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }

    /// Set whether individual comments are listed
    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, catalog: &Catalog) -> Result<String> {
        let data = ExportData::from_catalog(catalog, self.include_comments);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// Layout version
    pub version: String,
    pub exported_at: DateTime<Utc>,
    /// Statistics
    pub stats: ExportStats,
    /// One record per disc, in catalog order
    pub discs: Vec<ExportDisc>,
}

impl ExportData {
    /// Create from a catalog
    pub fn from_catalog(catalog: &Catalog, include_comments: bool) -> Self {
        Self {
            version: EXPORT_VERSION.to_string(),
            exported_at: Utc::now(),
            stats: ExportStats::from_catalog(catalog),
            discs: catalog
                .iter()
                .map(|d| ExportDisc::from_disc(d, include_comments))
                .collect(),
        }
    }
}

/// Export statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportStats {
    /// Disc count
    pub discs: usize,
    /// DVD count
    pub dvd: usize,
    /// Blu-ray count
    pub bluray: usize,
    /// Comment count over all discs
    pub comments: usize,
    /// Discs with at least one comment
    pub rated: usize,
}

impl ExportStats {
    /// Create from a catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let count_type = |t: DiscType| catalog.iter().filter(|d| d.disc_type() == t).count();

        Self {
            discs: catalog.len(),
            dvd: count_type(DiscType::Dvd),
            bluray: count_type(DiscType::BluRay),
            comments: catalog.comment_count(),
            rated: catalog.iter().filter(|d| d.comment_count() > 0).count(),
        }
    }
}

/// Exported disc record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDisc {
    /// Product ID
    pub id: String,
    pub name: String,
    /// Price as "amount currency"
    pub price: String,
    pub genre: String,
    pub image: String,
    /// Media type (dvd/bluray)
    #[serde(rename = "type")]
    pub disc_type: String,
    /// Overall rating
    pub rating: f64,
    pub comment_count: usize,
    /// Individual comments, omitted when disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<ExportComment>>,
}

impl ExportDisc {
    /// Create from a disc
    pub fn from_disc(disc: &Disc, include_comments: bool) -> Self {
        Self {
            id: disc.id().to_string(),
            name: disc.name().to_string(),
            price: disc.price().to_string(),
            genre: disc.genre().to_string(),
            image: disc.image().to_string(),
            disc_type: disc.disc_type().as_str().to_string(),
            rating: disc.overall_rating(),
            comment_count: disc.comment_count(),
            comments: include_comments
                .then(|| disc.comments().iter().map(ExportComment::from_comment).collect()),
        }
    }
}

/// Exported comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    /// Comment ID
    pub id: String,
    pub rating: u32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub date: DateTime<Utc>,
}

impl ExportComment {
    /// Create from a comment
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            rating: comment.rating,
            text: comment.text.clone(),
            author: comment.author.clone(),
            date: comment.date,
        }
    }
}
