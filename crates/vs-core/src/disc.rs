//! Disc: a DVD or Blu-ray in the catalog with a rating derived from comments
//!
//! A [`Disc`] embeds a [`Product`] for identity and price, owns its comments
//! and keeps `overall_rating` equal to the rounded mean of their ratings. The
//! rating is recomputed over the whole comment list on every append.

use crate::comment::Comment;
use crate::error::{Result, VideoshopError};
use crate::product::{Money, Product};
use crate::rating;
use crate::types::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// Physical media type of a disc
///
/// Written as `dvd`/`bluray`; read through [`FromStr`], so any case and
/// `blu-ray` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DiscType {
    #[serde(rename = "dvd")]
    Dvd,
    #[serde(rename = "bluray")]
    BluRay,
}

impl DiscType {
    /// Short lowercase name, as used in catalog files
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscType::Dvd => "dvd",
            DiscType::BluRay => "bluray",
        }
    }
}

impl fmt::Display for DiscType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            DiscType::Dvd => "DVD",
            DiscType::BluRay => "Blu-ray",
        })
    }
}

impl TryFrom<String> for DiscType {
    type Error = VideoshopError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for DiscType {
    type Err = VideoshopError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dvd" => Ok(DiscType::Dvd),
            "bluray" | "blu-ray" => Ok(DiscType::BluRay),
            _ => Err(VideoshopError::Validation(format!(
                "Unknown disc type: '{}'",
                s
            ))),
        }
    }
}

/// A rentable/sellable video disc with user comments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "DiscRecord", from = "DiscRecord")]
pub struct Disc {
    product: Product,
    genre: String,
    image: String,
    disc_type: DiscType,
    comments: Vec<Comment>,
    overall_rating: f64,
}

impl Disc {
    /// Create a disc without comments; its rating starts at 0.
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        price: Money,
        genre: impl Into<String>,
        disc_type: DiscType,
    ) -> Self {
        Self::from_product(Product::new(name, price), image, genre, disc_type)
    }

    /// Create a disc around an existing product
    pub fn from_product(
        product: Product,
        image: impl Into<String>,
        genre: impl Into<String>,
        disc_type: DiscType,
    ) -> Self {
        let mut disc = Self {
            product,
            genre: genre.into(),
            image: image.into(),
            disc_type,
            comments: Vec::new(),
            overall_rating: 0.0,
        };
        disc.recalculate_rating();
        disc
    }

    /// Append a comment and recompute the overall rating.
    ///
    /// Comments are not deduplicated; the same comment may be added twice.
    pub fn add_comment(&mut self, comment: Comment) {
        debug!(
            "Adding comment {} (rating {}) to disc {}",
            comment.id,
            comment.rating,
            self.product.id()
        );
        self.comments.push(comment);
        self.recalculate_rating();
    }

    fn recalculate_rating(&mut self) {
        self.overall_rating = rating::average(self.comments.iter().map(Comment::rating));
        debug!(
            "Disc {} rated {} over {} comments",
            self.product.id(),
            self.overall_rating,
            self.comments.len()
        );
    }

    /// Comments in insertion order.
    ///
    /// The view is read-only; comments can only be added through
    /// [`add_comment`](Self::add_comment):
    ///
    /// ```compile_fail
    /// use vs_core::{Comment, Disc, DiscType, Money};
    ///
    /// let price = Money::parse("9.99 EUR", "EUR").unwrap();
    /// let mut disc = Disc::new("Fido", "fido", price, "Comedy", DiscType::Dvd);
    /// disc.add_comment(Comment::new("Zombies!", 4));
    /// disc.comments().clear();
    /// ```
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn disc_type(&self) -> DiscType {
        self.disc_type
    }

    /// Rounded mean of all comment ratings, 0 without comments
    pub fn overall_rating(&self) -> f64 {
        self.overall_rating
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn id(&self) -> ProductId {
        self.product.id()
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn price(&self) -> &Money {
        self.product.price()
    }
}

/// Flat on-disk shape of a [`Disc`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiscRecord {
    /// Derived from type, name and image when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ProductId>,
    name: String,
    genre: String,
    image: String,
    #[serde(rename = "type")]
    disc_type: DiscType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overall_rating: Option<f64>,
    price: Money,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl From<Disc> for DiscRecord {
    fn from(disc: Disc) -> Self {
        Self {
            id: Some(disc.product.id()),
            name: disc.product.name().to_string(),
            genre: disc.genre,
            image: disc.image,
            disc_type: disc.disc_type,
            overall_rating: Some(disc.overall_rating),
            price: disc.product.price().clone(),
            comments: disc.comments,
        }
    }
}

impl From<DiscRecord> for Disc {
    fn from(record: DiscRecord) -> Self {
        let id = record.id.unwrap_or_else(|| {
            ProductId::from_key(&format!(
                "{}/{}/{}",
                record.disc_type.as_str(),
                record.name,
                record.image
            ))
        });
        let product = Product::with_id(id, record.name, record.price);
        let mut disc = Self {
            product,
            genre: record.genre,
            image: record.image,
            disc_type: record.disc_type,
            comments: record.comments,
            overall_rating: 0.0,
        };
        disc.recalculate_rating();

        if let Some(stored) = record.overall_rating {
            if stored != disc.overall_rating {
                warn!(
                    "Ignoring stored rating {} for disc {}, recomputed {}",
                    stored, disc.product.id(), disc.overall_rating
                );
            }
        }

        disc
    }
}
