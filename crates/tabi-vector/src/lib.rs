//! tabi-vector: hosted vector index access for tabi-gateway
//!
//! REST client for a Pinecone-style vector database: nearest-neighbour
//! queries with metadata filters, and batched vector upserts for the offline
//! ingestion pipeline.

pub mod client;
pub mod error;
pub mod models;

pub use client::VectorClient;
pub use error::{Result, VectorError};
pub use models::{eq_filter, ScoredVector, VectorIndexConfig, VectorRecord};
