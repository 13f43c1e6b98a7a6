use axum::http::StatusCode;

use crate::error::ApiError;

/// CORS preflight without the negotiation headers; answered without touching upstream.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Every verb other than GET and OPTIONS, including HEAD.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
