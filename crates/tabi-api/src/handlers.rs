//! HTTP API handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use tabi_planner::{PlanRequest, PlanResponse};

use crate::error::{ApiError, Result};
use crate::server::AppState;

/// Query parameters for the plan endpoint.
///
/// `user_id` is accepted as a string so a malformed value produces the same
/// JSON error shape as a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct PlanParams {
    pub user_id: Option<String>,
    pub city: Option<String>,
    pub language: Option<String>,
}

impl PlanParams {
    /// Validate required parameters
    pub fn validate(&self) -> Result<(i64, String)> {
        let user_id = self
            .user_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("Missing required parameters"))?;
        let city = self
            .city
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("Missing required parameters"))?;

        let user_id: i64 = user_id
            .parse()
            .map_err(|_| ApiError::bad_request("user_id must be an integer"))?;

        Ok((user_id, city.to_string()))
    }
}

/// Plan response envelope
#[derive(Debug, Serialize)]
pub struct PlanEnvelope {
    pub message: PlanResponse,
}

/// Health check endpoint
pub async fn health() -> &'static str {
    "ok"
}

/// Plan endpoint: recommend locations for a user's city visit
pub async fn plan(
    State(state): State<AppState>,
    Query(params): Query<PlanParams>,
) -> Result<Json<PlanEnvelope>> {
    debug!("Plan request: {:?}", params);

    let (user_id, city) = params.validate()?;

    // The survey is best-effort: any failure degrades to empty preferences.
    let preferences = match &state.booking {
        Some(booking) => match booking.user_survey(user_id).await {
            Ok(survey) => survey.preferences_text(),
            Err(e) => {
                error!("Error getting user survey: {}", e);
                String::new()
            }
        },
        None => String::new(),
    };

    let request = PlanRequest {
        user_id,
        city: city.clone(),
        language: params.language,
        preferences,
    };

    let response = state.planner.plan(request).await?;

    info!(
        "Plan for user {} in {}: {} locations",
        user_id,
        city,
        response.locations.len()
    );

    Ok(Json(PlanEnvelope { message: response }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let params = PlanParams {
            user_id: Some("42".to_string()),
            city: Some("hanoi".to_string()),
            language: None,
        };
        assert_eq!(params.validate().unwrap(), (42, "hanoi".to_string()));
    }

    #[test]
    fn test_validate_missing_user_id() {
        let params = PlanParams {
            city: Some("hanoi".to_string()),
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "Missing required parameters");
    }

    #[test]
    fn test_validate_missing_city() {
        let params = PlanParams {
            user_id: Some("42".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_empty_counts_as_missing() {
        let params = PlanParams {
            user_id: Some("42".to_string()),
            city: Some("".to_string()),
            language: None,
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_non_numeric_user_id() {
        let params = PlanParams {
            user_id: Some("abc".to_string()),
            city: Some("hanoi".to_string()),
            language: None,
        };
        let err = params.validate().unwrap_err();
        assert_eq!(err.message, "user_id must be an integer");
    }
}
