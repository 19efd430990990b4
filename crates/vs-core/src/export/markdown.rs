//! Markdown exporter for catalogs

use super::exporter::Exporter;
use crate::catalog::Catalog;
use crate::comment::Comment;
use crate::disc::{Disc, DiscType};
use crate::error::Result;
use crate::rating;

/// Markdown exporter
pub struct MarkdownExporter {
    /// List individual comments under each disc
    include_comments: bool,
    /// Include statistics section
    include_stats: bool,
    /// Number of stars in a rating bar
    max_rating: u32,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_comments: true,
            include_stats: true,
            max_rating: 5,
        }
    }

    /// Set whether to list comments
    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    /// Set whether to include statistics
    pub fn with_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    /// Set the length of the star bar
    pub fn with_max_rating(mut self, max_rating: u32) -> Self {
        self.max_rating = max_rating;
        self
    }

    fn render_header(&self) -> String {
        let mut header = String::new();
        header.push_str("# Videoshop Catalog\n\n");
        header.push_str(&format!(
            "**Date:** {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header
    }

    fn render_stats(&self, catalog: &Catalog) -> String {
        if !self.include_stats {
            return String::new();
        }

        let dvd = catalog
            .iter()
            .filter(|d| d.disc_type() == DiscType::Dvd)
            .count();

        let mut stats = String::new();
        stats.push_str("## Summary\n\n");
        stats.push_str(&format!("- **Discs:** {}\n", catalog.len()));
        stats.push_str(&format!("- {} DVDs\n", dvd));
        stats.push_str(&format!("- {} Blu-rays\n", catalog.len() - dvd));
        stats.push_str(&format!("- **Comments:** {}\n", catalog.comment_count()));
        stats.push('\n');
        stats
    }

    fn render_section(&self, title: &str, discs: &[&Disc]) -> String {
        if discs.is_empty() {
            return String::new();
        }

        let mut output = format!("## {}\n\n", title);
        for disc in discs {
            output.push_str(&self.render_disc(disc));
        }
        output
    }

    fn render_disc(&self, disc: &Disc) -> String {
        let mut output = format!("### {}\n\n", disc.name());
        output.push_str(&format!("- **Genre:** {}\n", disc.genre()));
        output.push_str(&format!("- **Price:** {}\n", disc.price()));
        output.push_str(&format!("- **Image:** `{}`\n", disc.image()));

        if disc.comment_count() == 0 {
            output.push_str("- **Rating:** not rated yet\n\n");
            return output;
        }

        output.push_str(&format!(
            "- **Rating:** {} {:.2} ({} comments)\n\n",
            rating::stars(disc.overall_rating(), self.max_rating),
            disc.overall_rating(),
            disc.comment_count()
        ));

        if self.include_comments {
            for comment in disc.comments() {
                output.push_str(&Self::render_comment(comment));
            }
        }

        output
    }

    fn render_comment(comment: &Comment) -> String {
        let mut output = String::new();
        for line in comment.text.lines() {
            output.push_str(&format!("> {}\n", line));
        }
        output.push_str(&format!(
            ">\n> *{}, {}, rated {}*\n\n",
            comment.author_or_anonymous(),
            comment.date.format("%Y-%m-%d"),
            comment.rating
        ));
        output
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, catalog: &Catalog) -> Result<String> {
        let (dvds, blurays): (Vec<&Disc>, Vec<&Disc>) = catalog
            .iter()
            .partition(|d| d.disc_type() == DiscType::Dvd);

        let mut output = self.render_header();
        output.push_str(&self.render_stats(catalog));
        output.push_str(&self.render_section("DVDs", &dvds));
        output.push_str(&self.render_section("Blu-rays", &blurays));

        if catalog.is_empty() {
            output.push_str("*The catalog is empty.*\n");
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
