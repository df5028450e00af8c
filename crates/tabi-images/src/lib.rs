//! tabi-images: image search for tabi-gateway
//!
//! Thin client over the Serper image search API, used to attach photo URLs
//! to recommended locations.

pub mod client;
pub mod error;
pub mod models;

pub use client::ImageSearchClient;
pub use error::{ImageSearchError, Result};
pub use models::ImageSearchConfig;
