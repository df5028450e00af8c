//! Data models for the vector index API

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Vector index client configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VectorIndexConfig {
    /// API key
    pub api_key: String,
    /// Index host URL
    pub index_host: String,
}

impl VectorIndexConfig {
    pub fn new(api_key: impl Into<String>, index_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            index_host: index_host.into(),
        }
    }
}

/// A vector to upsert, with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// Upsert request body
#[derive(Debug, Serialize)]
pub(crate) struct UpsertRequest {
    pub vectors: Vec<VectorRecord>,
}

/// Upsert response body
#[derive(Debug, Deserialize)]
pub(crate) struct UpsertResponse {
    #[serde(rename = "upsertedCount", default)]
    pub upserted_count: usize,
}

/// Query request body
#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest {
    pub vector: Vec<f32>,
    #[serde(rename = "topK")]
    pub top_k: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<serde_json::Value>,
    #[serde(rename = "includeMetadata")]
    pub include_metadata: bool,
}

/// Query response body
#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<ScoredVector>,
}

/// A query match with similarity score and metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredVector {
    pub id: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl ScoredVector {
    /// Document text stored alongside the vector, if any
    pub fn text(&self) -> Option<&str> {
        self.metadata.get("text").map(String::as_str)
    }
}

/// Build an equality metadata filter (`{"field": {"$eq": value}}`)
pub fn eq_filter(field: &str, value: &str) -> serde_json::Value {
    serde_json::json!({ field: { "$eq": value } })
}
