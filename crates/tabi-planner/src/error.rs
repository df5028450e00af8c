//! Error types for tabi-planner

use thiserror::Error;

/// tabi-planner error type
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Core error: {0}")]
    Core(#[from] tabi_core::Error),

    #[error("Vector index error: {0}")]
    Vector(#[from] tabi_vector::VectorError),

    #[error("Image search error: {0}")]
    ImageSearch(#[from] tabi_images::ImageSearchError),

    #[error("Model returned no answer")]
    EmptyResponse,

    #[error("Failed to parse model output: {0}")]
    OutputParse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;
