use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::StoreError;
use domain::{UnknownLevel, ValidationErrors};
use shared::dto::ErrorResponse;
use thiserror::Error;

/// Central error type for the risk API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// An extractor refused the body, path or query string.
    #[error("Rejected request: {message}")]
    Rejected {
        code: &'static str,
        status: StatusCode,
        message: String,
    },

    #[error("Risk {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    InvalidFilter(#[from] UnknownLevel),

    #[error("Storage error: {0}")]
    Storage(StoreError),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            other => ApiError::Storage(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            code: "INVALID_BODY",
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            code: "INVALID_PATH",
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            code: "INVALID_QUERY",
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, fields) = match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                errors.to_string(),
                Some(errors.fields().to_vec()),
            ),
            ApiError::Rejected {
                code,
                status,
                message,
            } => (status, code, message, None),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Risk not found".to_string(),
                None,
            ),
            ApiError::InvalidFilter(err) => {
                (StatusCode::BAD_REQUEST, "INVALID_FILTER", err.to_string(), None)
            }
            ApiError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Database error".to_string(),
                    None,
                )
            }
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: code,
            message,
            fields,
        });

        (status, body).into_response()
    }
}
