//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, plan};
use crate::server::AppState;

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Planning endpoint
        .route("/api/v1/plan", get(plan))
}
