//! Error types for videoshop

use thiserror::Error;

/// Main error type for videoshop
#[derive(Debug, Error)]
pub enum VideoshopError {
    /// Argument outside the domain an operation accepts
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Disc not found in a catalog
    #[error("Disc not found: {0}")]
    DiscNotFound(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<VideoshopError>,
    },
}

impl VideoshopError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        VideoshopError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for VideoshopError {
    fn from(err: toml::de::Error) -> Self {
        VideoshopError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for VideoshopError {
    fn from(err: toml::ser::Error) -> Self {
        VideoshopError::Toml(err.to_string())
    }
}

/// Result type alias for videoshop
pub type Result<T> = std::result::Result<T, VideoshopError>;
