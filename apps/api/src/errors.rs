use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Raised while building a pattern catalog. Only reachable at startup or when
/// a caller constructs its own catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid pattern for {category}: {source}")]
    InvalidPattern {
        category: String,
        #[source]
        source: regex::Error,
    },
}

impl CatalogError {
    pub fn invalid_pattern(category: impl Into<String>, source: regex::Error) -> Self {
        CatalogError::InvalidPattern {
            category: category.into(),
            source,
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {field} exceeds {limit} bytes")]
    PayloadTooLarge { field: &'static str, limit: usize },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PayloadTooLarge { .. } => {
                tracing::warn!("Rejected request: {self}");
                (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "PAYLOAD_TOO_LARGE",
                    self.to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
