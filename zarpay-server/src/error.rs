//! API error mapping
//!
//! Core errors become JSON `{"message": ...}` bodies: validation failures
//! are 400, missing records 404, everything else a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use zarpay_core::Error;

/// Wrapper so core errors can be returned straight from handlers
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("{what} not found")),
            err => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Handler result alias
pub type ApiResult<T> = std::result::Result<T, ApiError>;
