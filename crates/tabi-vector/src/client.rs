//! Vector index REST client

use reqwest::Client;
use tracing::{debug, error, info};

use crate::error::{Result, VectorError};
use crate::models::{
    QueryRequest, QueryResponse, ScoredVector, UpsertRequest, UpsertResponse, VectorIndexConfig,
    VectorRecord,
};

/// Vectors sent per upsert request
const UPSERT_BATCH_SIZE: usize = 100;

/// Client for a hosted vector index (Pinecone data-plane API)
#[derive(Clone)]
pub struct VectorClient {
    client: Client,
    config: VectorIndexConfig,
    base_url: String,
}

impl VectorClient {
    /// Create a new vector index client
    pub fn new(config: VectorIndexConfig) -> Result<Self> {
        if config.index_host.is_empty() {
            return Err(VectorError::Configuration("index host is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| VectorError::Configuration(e.to_string()))?;

        let base_url = config.index_host.trim_end_matches('/').to_string();

        info!("Vector index client initialized for: {}", base_url);

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Query the index for the nearest vectors
    pub async fn query(
        &self,
        vector: Vec<f32>,
        top_k: usize,
        filter: Option<serde_json::Value>,
    ) -> Result<Vec<ScoredVector>> {
        let url = format!("{}/query", self.base_url);

        let body = QueryRequest {
            vector,
            top_k,
            filter,
            include_metadata: true,
        };

        debug!("Querying index: top_k={}", top_k);

        let response = self
            .client
            .post(&url)
            .header("Api-Key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| VectorError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Vector query failed: {} - {}", status, error_text);
            return Err(VectorError::IndexError(format!(
                "Query failed: {} - {}",
                status, error_text
            )));
        }

        let parsed: QueryResponse = response
            .json()
            .await
            .map_err(|e| VectorError::ParseError(e.to_string()))?;

        debug!("Query returned {} matches", parsed.matches.len());
        Ok(parsed.matches)
    }

    /// Upsert vectors into the index, batching as needed
    pub async fn upsert(&self, vectors: Vec<VectorRecord>) -> Result<usize> {
        let url = format!("{}/vectors/upsert", self.base_url);
        let mut total = 0;

        for chunk in vectors.chunks(UPSERT_BATCH_SIZE) {
            let body = UpsertRequest {
                vectors: chunk.to_vec(),
            };

            let response = self
                .client
                .post(&url)
                .header("Api-Key", &self.config.api_key)
                .json(&body)
                .send()
                .await
                .map_err(|e| VectorError::Connection(e.to_string()))?;

            if !response.status().is_success() {
                let status = response.status();
                let error_text = response.text().await.unwrap_or_default();
                error!("Vector upsert failed: {} - {}", status, error_text);
                return Err(VectorError::IndexError(format!(
                    "Upsert failed: {} - {}",
                    status, error_text
                )));
            }

            let parsed: UpsertResponse = response
                .json()
                .await
                .map_err(|e| VectorError::ParseError(e.to_string()))?;

            total += parsed.upserted_count;
            debug!("Upserted batch of {}", chunk.len());
        }

        info!("Upserted {} vectors", total);
        Ok(total)
    }
}
