//! tabi-planner: retrieval-augmented travel planning
//!
//! Holds the conversation orchestration: session history, query embedding,
//! city-filtered vector retrieval, prompt assembly, model output parsing,
//! and image augmentation. Also hosts the offline CSV ingestion pipeline.

pub mod error;
pub mod ingest;
pub mod output;
pub mod planner;
pub mod prompt;

pub use error::{PlannerError, Result};
pub use ingest::Ingestor;
pub use planner::{PlanRequest, PlanResponse, Planner};
