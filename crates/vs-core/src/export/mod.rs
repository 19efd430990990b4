//! Export functionality for catalogs
//!
//! Presents discs as flat records for other tools and people:
//! - JSON format (compact and pretty-printed)
//! - Markdown format (human-readable catalog report)
//!
//! # Example
//!
//! ```ignore
//! use vs_core::export::ExportManager;
//!
//! let manager = ExportManager::new();
//! let json = manager.export(&catalog, "json")?;
//! let md = manager.export(&catalog, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportData, ExportDisc, ExportStats, JsonExporter};
pub use markdown::MarkdownExporter;
