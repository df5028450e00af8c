//! Error types for tabi-booking

use thiserror::Error;

/// tabi-booking error type
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BookingError>;
