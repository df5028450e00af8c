//! JSON error responses for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use tabi_planner::PlannerError;

/// API error carrying the HTTP status and the JSON error body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

/// Error body shape: `{"error": "Bad Request", "message": ..., "code": 400}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.message,
            code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<PlannerError> for ApiError {
    fn from(err: PlannerError) -> Self {
        match &err {
            // Upstream service failures
            PlannerError::Core(_) | PlannerError::Vector(_) | PlannerError::ImageSearch(_) => {
                ApiError::bad_gateway(err.to_string())
            }
            _ => ApiError::internal(err.to_string()),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_body_shape() {
        let err = ApiError::bad_request("Missing required parameters");
        let body = ErrorBody {
            error: err.status.canonical_reason().unwrap().to_string(),
            message: err.message.clone(),
            code: err.status.as_u16(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "Bad Request");
        assert_eq!(json["message"], "Missing required parameters");
        assert_eq!(json["code"], 400);
    }

    #[test]
    fn test_planner_error_mapping() {
        let err: ApiError = PlannerError::EmptyResponse.into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = PlannerError::OutputParse("bad".to_string()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
