//! Error types for tabi-core

use thiserror::Error;

/// Main error type for tabi-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("OpenAI API error: {0}")]
    OpenAiApi(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Location parsing error: {0}")]
    LocationParse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for tabi-core
pub type Result<T> = std::result::Result<T, Error>;
