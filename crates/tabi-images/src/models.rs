//! Data models for the image search API

use serde::{Deserialize, Serialize};

/// Image search client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSearchConfig {
    /// Serper API key
    pub api_key: String,
    /// Country code for result localization
    pub gl: String,
    /// Maximum image URLs returned per search
    pub max_results: usize,
}

impl ImageSearchConfig {
    pub fn new(api_key: impl Into<String>, gl: impl Into<String>, max_results: usize) -> Self {
        Self {
            api_key: api_key.into(),
            gl: gl.into(),
            max_results,
        }
    }
}

/// Search request body
#[derive(Debug, Serialize)]
pub(crate) struct SearchRequest {
    pub q: String,
    pub gl: String,
}

/// Search response body
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub images: Vec<ImageResult>,
}

/// Single image result
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ImageResult {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "images": [
                {"imageUrl": "https://img.example.com/1.jpg", "title": "one"},
                {"imageUrl": "https://img.example.com/2.jpg"}
            ]
        }"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.images.len(), 2);
        assert_eq!(response.images[0].image_url, "https://img.example.com/1.jpg");
    }

    #[test]
    fn test_parse_empty_response() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.images.is_empty());
    }
}
