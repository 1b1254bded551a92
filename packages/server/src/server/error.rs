use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::common::AuthError;

/// Errors a handler can return; each maps to exactly one status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthenticated,

    /// Also used when the resource exists but belongs to someone else
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Unauthenticated
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            ApiError::Internal(e) => {
                tracing::error!(error = %format!("{:#}", e), "Request failed");
                "Internal Error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        let cases = [
            (ApiError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (ApiError::NotFound("Document"), StatusCode::NOT_FOUND),
            (ApiError::Validation("Title is required".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::Internal(anyhow::anyhow!("connection reset")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn auth_errors_become_unauthenticated() {
        assert!(matches!(
            ApiError::from(AuthError::AuthenticationRequired),
            ApiError::Unauthenticated
        ));
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(ApiError::NotFound("Document").to_string(), "Document not found");
    }
}
