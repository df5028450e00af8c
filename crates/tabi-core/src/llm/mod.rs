//! OpenAI API client and types
//!
//! Covers the two endpoints this service consumes: chat completions and
//! embeddings.

mod client;
mod types;

pub use client::OpenAiClient;
pub use types::*;
