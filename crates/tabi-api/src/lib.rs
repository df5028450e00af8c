//! tabi-api: HTTP API for tabi-gateway
//!
//! REST endpoints for travel planning. Built with axum for async HTTP
//! handling.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::{ApiError, Result};
pub use server::{start_server, AppState};
