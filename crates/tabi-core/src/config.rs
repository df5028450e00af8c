//! Configuration management
//!
//! Settings are resolved in the following order:
//! 1. Environment variables
//! 2. tabi-gateway.toml configuration file
//! 3. Defaults
//!
//! Inside the configuration file, `${VAR_NAME}` expands to the value of the
//! corresponding environment variable.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Error;

/// LLM configuration (chat completions and embeddings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// OpenAI API key
    #[serde(default)]
    pub api_key: String,

    /// Chat-completion model
    #[serde(default = "default_chat_model")]
    pub chat_model: String,

    /// Embedding model
    #[serde(default = "default_embedding_model")]
    pub embedding_model: String,

    /// Embedding output dimensions
    #[serde(default = "default_embedding_dimensions")]
    pub embedding_dimensions: u32,

    /// Base URL (optional, for custom endpoints)
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_model: default_chat_model(),
            embedding_model: default_embedding_model(),
            embedding_dimensions: default_embedding_dimensions(),
            base_url: None,
        }
    }
}

fn default_chat_model() -> String {
    "gpt-3.5-turbo-0125".to_string()
}

fn default_embedding_model() -> String {
    "text-embedding-3-small".to_string()
}

fn default_embedding_dimensions() -> u32 {
    512
}

/// Vector index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Vector database API key
    #[serde(default)]
    pub api_key: String,

    /// Index host URL (e.g. https://my-index-abc123.svc.us-east-1.pinecone.io)
    #[serde(default)]
    pub index_host: String,

    /// Number of documents retrieved per query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            index_host: String::new(),
            top_k: default_top_k(),
        }
    }
}

fn default_top_k() -> usize {
    5
}

/// Image search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImagesConfig {
    /// Serper API key
    #[serde(default)]
    pub api_key: String,

    /// Country code for search localization
    #[serde(default = "default_gl")]
    pub gl: String,

    /// Image URLs attached per location
    #[serde(default = "default_per_location")]
    pub per_location: usize,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            gl: default_gl(),
            per_location: default_per_location(),
        }
    }
}

fn default_gl() -> String {
    "vn".to_string()
}

fn default_per_location() -> usize {
    10
}

/// Booking service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Base URL of the booking service
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_booking_timeout")]
    pub timeout_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_booking_timeout(),
        }
    }
}

fn default_booking_timeout() -> u64 {
    10
}

/// HTTP API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Port for the HTTP API server
    #[serde(default = "default_api_port")]
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: default_api_port(),
        }
    }
}

fn default_api_port() -> u16 {
    5000
}

/// Conversation session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Idle seconds before a session is dropped
    #[serde(default = "default_session_ttl")]
    pub ttl_secs: u64,

    /// Maximum messages kept per session
    #[serde(default = "default_max_messages")]
    pub max_messages: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl(),
            max_messages: default_max_messages(),
        }
    }
}

fn default_session_ttl() -> u64 {
    5 * 60
}

fn default_max_messages() -> usize {
    5
}

/// Main configuration for tabi-gateway
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LLM configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Vector index configuration
    #[serde(default)]
    pub vector: VectorConfig,

    /// Image search configuration
    #[serde(default)]
    pub images: ImagesConfig,

    /// Booking service configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// HTTP API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// Session configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Expand `${VAR_NAME}` references to environment variable values.
    ///
    /// Unknown variables expand to the empty string.
    fn expand_env_vars(value: &str) -> String {
        let mut result = String::new();
        let mut chars = value.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '$' && chars.peek() == Some(&'{') {
                chars.next(); // consume '{'

                let mut var_name = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '}' {
                        chars.next(); // consume '}'
                        break;
                    }
                    var_name.push(c);
                    chars.next();
                }

                if let Ok(env_value) = std::env::var(&var_name) {
                    result.push_str(&env_value);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// Load configuration from a TOML file.
    ///
    /// `${VAR_NAME}` references in the file are expanded before parsing,
    /// and environment variables still take precedence afterwards.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();

        let toml_content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

        let expanded_content = Self::expand_env_vars(&toml_content);

        let mut config: Config = toml::from_str(&expanded_content)
            .map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))?;

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load configuration from environment variables only.
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from the default locations.
    ///
    /// Tries `./tabi-gateway.toml` first, falls back to environment only.
    pub fn load() -> crate::Result<Self> {
        if Path::new("tabi-gateway.toml").exists() {
            return Self::from_toml_file("tabi-gateway.toml");
        }

        Self::from_env()
    }

    /// Override settings from environment variables.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if !api_key.is_empty() {
                self.llm.api_key = api_key;
            }
        }
        if let Ok(model) = std::env::var("OPENAI_CHAT_MODEL") {
            if !model.is_empty() {
                self.llm.chat_model = model;
            }
        }
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            if !base_url.is_empty() {
                self.llm.base_url = Some(base_url);
            }
        }

        if let Ok(api_key) = std::env::var("PINECONE_API_KEY") {
            if !api_key.is_empty() {
                self.vector.api_key = api_key;
            }
        }
        if let Ok(host) = std::env::var("PINECONE_INDEX_HOST") {
            if !host.is_empty() {
                self.vector.index_host = host;
            }
        }

        if let Ok(api_key) = std::env::var("SERPER_API_KEY") {
            if !api_key.is_empty() {
                self.images.api_key = api_key;
            }
        }

        if let Ok(base_url) = std::env::var("TABI_BOOKING_BASE_URL") {
            if !base_url.is_empty() {
                self.booking.base_url = base_url;
            }
        }

        if let Ok(port) = std::env::var("API_PORT") {
            if let Ok(port) = port.parse() {
                self.api.port = port;
            }
        }
    }

    /// Validate that the keys required for serving are present.
    pub fn validate(&self) -> crate::Result<()> {
        if self.llm.api_key.is_empty() {
            return Err(Error::Config("OPENAI_API_KEY is not set".to_string()));
        }
        if self.vector.api_key.is_empty() {
            return Err(Error::Config("PINECONE_API_KEY is not set".to_string()));
        }
        if self.vector.index_host.is_empty() {
            return Err(Error::Config("PINECONE_INDEX_HOST is not set".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.llm.chat_model, "gpt-3.5-turbo-0125");
        assert_eq!(config.llm.embedding_model, "text-embedding-3-small");
        assert_eq!(config.llm.embedding_dimensions, 512);
        assert_eq!(config.vector.top_k, 5);
        assert_eq!(config.images.per_location, 10);
        assert_eq!(config.session.ttl_secs, 300);
        assert_eq!(config.session.max_messages, 5);
        assert_eq!(config.api.port, 5000);
    }

    #[test]
    fn test_expand_env_vars() {
        unsafe { std::env::set_var("TABI_TEST_EXPAND", "secret") };
        let expanded = Config::expand_env_vars("api_key = \"${TABI_TEST_EXPAND}\"");
        assert_eq!(expanded, "api_key = \"secret\"");

        // Unknown variables expand to empty
        let expanded = Config::expand_env_vars("key = \"${TABI_TEST_MISSING_VAR}\"");
        assert_eq!(expanded, "key = \"\"");
    }

    #[test]
    fn test_parse_toml_sections() {
        let toml = r#"
            [llm]
            api_key = "sk-test"

            [vector]
            api_key = "pc-test"
            index_host = "https://idx.example.com"
            top_k = 7

            [booking]
            base_url = "http://booking:8080"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.vector.top_k, 7);
        assert_eq!(config.booking.base_url, "http://booking:8080");
        // Unspecified sections fall back to defaults
        assert_eq!(config.session.max_messages, 5);
    }
}
