//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad reference: {0}")]
    Reference(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            AppError::Reference(_) => (StatusCode::BAD_REQUEST, "bad_reference"),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}

/// Translate a failed write into the taxonomy: unique-index hits become
/// `Conflict`, foreign-key hits become `Reference`, NOT NULL hits become
/// `Validation`. Anything else stays a database error.
pub(crate) fn map_write_err(e: sqlx::Error, what: &str) -> AppError {
    use sqlx::error::ErrorKind;
    if let sqlx::Error::Database(db) = &e {
        match db.kind() {
            ErrorKind::UniqueViolation => {
                return AppError::Conflict(format!("{}: {}", what, db.message()));
            }
            ErrorKind::ForeignKeyViolation => {
                return AppError::Reference(format!("{}: referenced row does not exist", what));
            }
            ErrorKind::NotNullViolation => {
                return AppError::Validation(format!("{}: {}", what, db.message()));
            }
            _ => {}
        }
    }
    AppError::Db(e)
}
