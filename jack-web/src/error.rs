//! Error types for jack-web
//!
//! Validation failures never reach this type: handlers recover from them by
//! re-rendering the page. `ApiError` covers what ends the request early.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api::ui;

/// Error type for the HTML page handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Channel or video absent (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// jack-common error
    #[error("Common error: {0}")]
    Common(#[from] jack_common::Error),
}

impl ApiError {
    fn status_and_message(self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Common(jack_common::Error::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg)
            }
            ApiError::Common(err) => {
                tracing::error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "COMMON_ERROR", err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _, message) = self.status_and_message();
        (status, Html(ui::render_error_page(status, &message))).into_response()
    }
}

/// `ApiError` rendered as `{"error": {"code", "message"}}`
#[derive(Debug)]
pub struct JsonError(ApiError);

impl From<ApiError> for JsonError {
    fn from(err: ApiError) -> Self {
        JsonError(err)
    }
}

impl From<jack_common::Error> for JsonError {
    fn from(err: jack_common::Error) -> Self {
        JsonError(ApiError::Common(err))
    }
}

impl IntoResponse for JsonError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = self.0.status_and_message();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for page handlers
pub type ApiResult<T> = Result<T, ApiError>;
