// src/api/error.rs
// Boundary error type: every failure leaves the API as a JSON `{"error": ...}` body

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::recommend::RecommendError;

/// Shown when the request carries no text to classify
pub const EMPTY_TEXT_MESSAGE: &str = "Texto vazio";

#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::EmptyInput => ApiError::bad_request(EMPTY_TEXT_MESSAGE),
            RecommendError::Provider(e) => ApiError::internal(e.to_string()),
        }
    }
}

/// Body was not JSON, or not an object we can read. Keeps the extractor's 4xx status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            message: rejection.body_text(),
            status_code: rejection.status(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ProviderError;

    #[test]
    fn test_empty_input_is_bad_request() {
        let error = ApiError::from(RecommendError::EmptyInput);
        assert_eq!(error.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, EMPTY_TEXT_MESSAGE);
    }

    #[test]
    fn test_provider_error_is_internal() {
        let error = ApiError::from(RecommendError::Provider(ProviderError::MissingApiKey));
        assert_eq!(error.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message, "GEMINI_API_KEY not set");
    }

    #[tokio::test]
    async fn test_renders_error_body() {
        let response = ApiError::internal("Gemini API error: 503 - overloaded").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Gemini API error: 503 - overloaded" }));
    }
}
