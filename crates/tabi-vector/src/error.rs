//! Error types for tabi-vector

use thiserror::Error;

/// tabi-vector error type
#[derive(Error, Debug)]
pub enum VectorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Index error: {0}")]
    IndexError(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, VectorError>;
