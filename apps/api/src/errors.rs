use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::intake::validation::FieldError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every error body carries a human-readable `error` string; internal details
/// are logged and never sent to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid profile: {}", summarize(.0))]
    InvalidProfile(Vec<FieldError>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected failure behind a handler. The engine itself is total, so this
    /// is the 5xx path for anything outside it; details are logged, never returned.
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidProfile(errors) => {
                let fields: BTreeMap<&str, &str> = errors
                    .iter()
                    .map(|e| (e.field.as_str(), e.message.as_str()))
                    .collect();
                let body = Json(json!({
                    "error": summarize(&errors),
                    "code": "VALIDATION_ERROR",
                    "fields": fields,
                }));
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            AppError::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, "INVALID_BODY", msg),
            AppError::NotFound(msg) => error_response(StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                internal_error_response()
            }
        }
    }
}

fn error_response(status: StatusCode, code: &str, message: String) -> Response {
    let body = Json(json!({
        "error": message,
        "code": code,
    }));
    (status, body).into_response()
}

/// Generic 500 body, also used when a handler panics.
pub fn internal_error_response() -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "Internal server error".to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::validation::ProfileField;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_profile_lists_fields() {
        let err = AppError::InvalidProfile(vec![
            FieldError {
                field: ProfileField::Age,
                message: "bad age".to_string(),
            },
            FieldError {
                field: ProfileField::RiskTolerance,
                message: "bad risk".to_string(),
            },
        ]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "bad age; bad risk");
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert_eq!(body["fields"]["age"], "bad age");
        assert_eq!(body["fields"]["riskTolerance"], "bad risk");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let err = AppError::Internal(anyhow::anyhow!("secret stack detail"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("secret"));
    }

    #[tokio::test]
    async fn test_not_found_status() {
        let response = AppError::NotFound("legacy rules disabled".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }
}
