//! Error types for tabi-images

use thiserror::Error;

/// tabi-images error type
#[derive(Error, Debug)]
pub enum ImageSearchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Search error: {0}")]
    SearchError(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ImageSearchError>;
