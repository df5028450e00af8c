//! tabi-core: Tabi Gateway Core Library
//!
//! Shared configuration, the OpenAI chat/embeddings client, the in-memory
//! conversation session store, and the location record model.

pub mod config;
pub mod error;
pub mod llm;
pub mod location;
pub mod session;

pub use config::{ApiConfig, BookingConfig, Config, ImagesConfig, LlmConfig, SessionConfig, VectorConfig};
pub use error::{Error, Result};
pub use llm::{ChatMessage, OpenAiClient};
pub use location::Location;
pub use session::{Session, SessionKey, SessionStore};
