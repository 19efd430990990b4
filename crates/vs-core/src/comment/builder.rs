//! Comment builder for fluent API

use super::model::Comment;
use super::validator::CommentValidator;
use crate::error::Result;
use crate::types::CommentId;
use chrono::{DateTime, Utc};

/// Builder for creating validated comments
pub struct CommentBuilder {
    text: String,
    rating: u32,
    author: Option<String>,
    date: Option<DateTime<Utc>>,
    validator: CommentValidator,
}

impl CommentBuilder {
    /// Create a new builder
    pub fn new(text: impl Into<String>, rating: u32) -> Self {
        Self {
            text: text.into(),
            rating,
            author: None,
            date: None,
            validator: CommentValidator::new(),
        }
    }

    /// Set the author
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the comment date (defaults to now)
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Use a custom validator
    pub fn validator(mut self, validator: CommentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Build and validate the comment
    pub fn build(self) -> Result<Comment> {
        let comment = Comment {
            id: CommentId::new(),
            text: self.text.trim().to_string(),
            rating: self.rating,
            date: self.date.unwrap_or_else(Utc::now),
            author: self.author,
        };

        self.validator.validate(&comment)?;
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RatingConfig;
    use chrono::TimeZone;

    #[test]
    fn test_builder_basic() {
        let comment = CommentBuilder::new("  Great movie  ", 5)
            .author("Vincent")
            .build()
            .unwrap();

        assert_eq!(comment.text, "Great movie");
        assert_eq!(comment.rating, 5);
        assert_eq!(comment.author.as_deref(), Some("Vincent"));
    }

    #[test]
    fn test_builder_date() {
        let date = Utc.with_ymd_and_hms(2018, 10, 29, 12, 0, 0).unwrap();
        let comment = CommentBuilder::new("Classic", 4).date(date).build().unwrap();
        assert_eq!(comment.date, date);
    }

    #[test]
    fn test_builder_rejects_empty_text() {
        assert!(CommentBuilder::new("   ", 3).build().is_err());
    }

    #[test]
    fn test_builder_rejects_out_of_range_rating() {
        assert!(CommentBuilder::new("Meh", 0).build().is_err());
        assert!(CommentBuilder::new("Wow", 6).build().is_err());
    }

    #[test]
    fn test_builder_custom_validator() {
        let config = RatingConfig {
            min_rating: 0,
            max_rating: 10,
            ..RatingConfig::default()
        };
        let comment = CommentBuilder::new("Ten out of ten", 10)
            .validator(CommentValidator::from_config(&config))
            .build()
            .unwrap();
        assert_eq!(comment.rating, 10);
    }
}
