use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketpulse_core::errors::Error as CoreError;
use serde_json::json;
use thiserror::Error;

use crate::models::iso_timestamp;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "This endpoint only accepts GET requests";
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{}", METHOD_NOT_ALLOWED_MESSAGE)]
    MethodNotAllowed,
    #[error("{0}")]
    Configuration(String),
    #[error("{message}")]
    NotFound {
        message: String,
        ticker: String,
        year: i32,
        quarter: u8,
    },
    #[error("{0}")]
    BadRequest(String),
    /// Carries the caller-facing message only; details are logged where the error is built.
    #[error("{0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Configuration(message) => ApiError::Configuration(message),
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::TranscriptNotFound {
                ticker,
                year,
                quarter,
            } => {
                let message = CoreError::TranscriptNotFound {
                    ticker: ticker.clone(),
                    year,
                    quarter,
                }
                .to_string();
                ApiError::NotFound {
                    message,
                    ticker,
                    year,
                    quarter,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({
                    "error": "Method not allowed",
                    "message": METHOD_NOT_ALLOWED_MESSAGE,
                }),
            ),
            ApiError::Configuration(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Configuration error",
                    "message": message,
                }),
            ),
            ApiError::NotFound {
                message,
                ticker,
                year,
                quarter,
            } => (
                StatusCode::NOT_FOUND,
                json!({
                    "success": false,
                    "error": "Not found",
                    "message": message,
                    "ticker": ticker,
                    "year": year,
                    "quarter": quarter,
                }),
            ),
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "success": false,
                    "error": "Bad request",
                    "message": message,
                }),
            ),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "success": false,
                    "error": "Internal server error",
                    "message": message,
                    "timestamp": iso_timestamp(chrono::Utc::now()),
                }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_mapping() {
        let err = ApiError::from(CoreError::Configuration(
            "API_KEY environment variable is not configured".to_string(),
        ));
        assert!(matches!(err, ApiError::Configuration(_)));

        let err = ApiError::from(CoreError::Validation("Invalid quarter".to_string()));
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err = ApiError::from(CoreError::TranscriptNotFound {
            ticker: "AAPL".to_string(),
            year: 2024,
            quarter: 2,
        });
        assert_eq!(err.to_string(), "No earnings transcript found for AAPL Q2 2024");
    }

    #[test]
    fn test_internal_error_body_is_generic() {
        let response = ApiError::Internal(GENERIC_FAILURE_MESSAGE.to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::BadRequest("bad".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }
}
