use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::catalog::loader::CatalogError;
use crate::matching::profile::ProfileError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ProfileError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Catalog not loaded yet")]
    CatalogUnavailable,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", e.to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::CatalogUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "CATALOG_UNAVAILABLE",
                "The tool catalog is still loading, retry shortly".to_string(),
            ),
            AppError::Catalog(e) => {
                tracing::error!("Catalog error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CATALOG_LOAD_ERROR",
                    e.to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let mut error = json!({
            "code": code,
            "message": message
        });
        if let AppError::Validation(e) = &self {
            error["field"] = json!(e.field());
            error["reason"] = json!(e.reason());
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_carries_field_and_reason() {
        let (status, body) = render(AppError::Validation(ProfileError::UnknownValue {
            field: "workflow",
            value: "Juggling".to_string(),
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["field"], "workflow");
        assert_eq!(body["error"]["reason"], "unknown_value");
    }

    #[tokio::test]
    async fn test_unavailable_is_503() {
        let (status, body) = render(AppError::CatalogUnavailable).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CATALOG_UNAVAILABLE");
        assert!(body["error"].get("field").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = render(AppError::Internal(anyhow::anyhow!("disk on fire"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "An internal server error occurred");
    }
}
