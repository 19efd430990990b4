//! Comment validation

use super::model::Comment;
use crate::config::RatingConfig;
use crate::error::{Result, VideoshopError};

/// Minimum comment length
pub const MIN_TEXT_LENGTH: usize = 1;

/// Validator for comments
#[derive(Debug, Clone)]
pub struct CommentValidator {
    min_rating: u32,
    max_rating: u32,
    max_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self::from_config(&RatingConfig::default())
    }

    /// Create a validator from rating configuration
    pub fn from_config(config: &RatingConfig) -> Self {
        Self {
            min_rating: config.min_rating,
            max_rating: config.max_rating,
            max_length: config.max_text_length,
        }
    }

    /// Validate comment text
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();
        let len = trimmed.chars().count();

        if len < MIN_TEXT_LENGTH {
            return Err(VideoshopError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        if len > self.max_length {
            return Err(VideoshopError::Validation(format!(
                "Comment text exceeds maximum length of {} characters",
                self.max_length
            )));
        }

        Ok(())
    }

    /// Validate a rating against the configured range
    pub fn validate_rating(&self, rating: u32) -> Result<()> {
        if !(self.min_rating..=self.max_rating).contains(&rating) {
            return Err(VideoshopError::Validation(format!(
                "Rating {} is outside {}..={}",
                rating, self.min_rating, self.max_rating
            )));
        }
        Ok(())
    }

    /// Validate a complete comment
    pub fn validate(&self, comment: &Comment) -> Result<()> {
        self.validate_text(&comment.text)?;
        self.validate_rating(comment.rating)?;

        if let Some(author) = &comment.author {
            if author.trim().is_empty() {
                return Err(VideoshopError::Validation(
                    "Author cannot be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
