//! Comment data model

use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user comment with a numeric rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    #[serde(default)]
    pub id: CommentId,
    /// Comment text
    pub text: String,
    /// Rating given by the author
    pub rating: u32,
    /// When the comment was written
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
    /// Author display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Comment {
    /// Create an anonymous comment dated now, without validation
    pub fn new(text: impl Into<String>, rating: u32) -> Self {
        Self {
            id: CommentId::new(),
            text: text.into(),
            rating,
            date: Utc::now(),
            author: None,
        }
    }

    pub fn rating(&self) -> u32 {
        self.rating
    }

    /// Author name, or "anonymous"
    pub fn author_or_anonymous(&self) -> &str {
        self.author.as_deref().unwrap_or("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new("Great movie", 5);
        assert_eq!(comment.text, "Great movie");
        assert_eq!(comment.rating(), 5);
        assert!(comment.author.is_none());
        assert_eq!(comment.author_or_anonymous(), "anonymous");
    }

    #[test]
    fn test_comment_serialization() {
        let mut comment = Comment::new("Fine", 3);
        comment.author = Some("Vincent".to_string());

        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment, comment2);
    }

    #[test]
    fn test_comment_minimal_input() {
        let comment: Comment = serde_json::from_str(r#"{"text":"ok","rating":2}"#).unwrap();
        assert_eq!(comment.rating, 2);
        assert!(comment.author.is_none());
    }

    #[test]
    fn test_anonymous_author_not_serialized() {
        let json = serde_json::to_string(&Comment::new("Fine", 3)).unwrap();
        assert!(!json.contains("author"));
    }
}
