//! OpenAI API HTTP client

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Error, Result};

use super::types::*;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Client for the OpenAI chat-completion and embeddings endpoints
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    chat_model: String,
    embedding_model: String,
    embedding_dimensions: u32,
    base_url: String,
}

impl OpenAiClient {
    /// Create a new client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(Error::Http)?;

        let base_url = config
            .llm
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            api_key: config.llm.api_key.clone(),
            chat_model: config.llm.chat_model.clone(),
            embedding_model: config.llm.embedding_model.clone(),
            embedding_dimensions: config.llm.embedding_dimensions,
            base_url,
        })
    }

    /// Create with a custom base URL (for testing or custom endpoints)
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let mut client = Self::new(config)?;
        client.base_url = base_url;
        Ok(client)
    }

    /// Send a chat-completion request
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: self.chat_model.clone(),
            messages,
            temperature: None,
        };

        debug!("Sending chat request to {}", url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Http)?;

        if !status.is_success() {
            warn!("OpenAI API error: {} - {}", status, body);
            return Err(Error::OpenAiApi(format!("{}: {}", status, body)));
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| Error::OpenAiApi(format!("Failed to parse response: {} - {}", e, body)))?;

        info!(
            "Chat response: finish_reason={:?}, tokens={}",
            parsed.choices.first().and_then(|c| c.finish_reason.clone()),
            parsed.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0)
        );

        Ok(parsed)
    }

    /// Embed a batch of input texts
    pub async fn embed(&self, input: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let url = format!("{}/embeddings", self.base_url);

        let request = EmbeddingsRequest {
            model: self.embedding_model.clone(),
            input,
            dimensions: self.embedding_dimensions,
        };

        debug!("Sending embeddings request for {} inputs", request.input.len());

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(Error::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Http)?;

        if !status.is_success() {
            warn!("OpenAI embeddings error: {} - {}", status, body);
            return Err(Error::OpenAiApi(format!("{}: {}", status, body)));
        }

        let parsed: EmbeddingsResponse = serde_json::from_str(&body)
            .map_err(|e| Error::OpenAiApi(format!("Failed to parse response: {} - {}", e, body)))?;

        // The API is documented to return entries in input order, but sort by
        // index to be sure.
        let mut data = parsed.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    /// Get the chat model name
    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }
}
