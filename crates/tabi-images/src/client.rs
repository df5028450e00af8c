//! Serper image search client

use reqwest::Client;
use tracing::{debug, error};

use crate::error::{ImageSearchError, Result};
use crate::models::{ImageSearchConfig, SearchRequest, SearchResponse};

const DEFAULT_ENDPOINT: &str = "https://google.serper.dev/images";

/// Client for the Serper image search API
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    config: ImageSearchConfig,
    endpoint: String,
}

impl ImageSearchClient {
    /// Create a new image search client
    pub fn new(config: ImageSearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .map_err(|e| ImageSearchError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            config,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Create with a custom endpoint (for testing)
    pub fn with_endpoint(config: ImageSearchConfig, endpoint: String) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.endpoint = endpoint;
        Ok(client)
    }

    /// Search for images, returning at most `max_results` URLs
    pub async fn search(&self, query: &str) -> Result<Vec<String>> {
        let body = SearchRequest {
            q: query.to_string(),
            gl: self.config.gl.clone(),
        };

        debug!("Image search: {}", query);

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ImageSearchError::Connection(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Image search failed: {} - {}", status, error_text);
            return Err(ImageSearchError::SearchError(format!(
                "Request failed: {} - {}",
                status, error_text
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| ImageSearchError::ParseError(e.to_string()))?;

        let urls: Vec<String> = parsed
            .images
            .into_iter()
            .take(self.config.max_results)
            .map(|image| image.image_url)
            .collect();

        debug!("Image search returned {} urls", urls.len());
        Ok(urls)
    }
}
