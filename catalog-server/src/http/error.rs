//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Every body has the shape `{"error": <code>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::catalog::CatalogError;
use crate::db::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Request could not be used as sent (400)
    BadRequest { message: String },

    /// Referenced resource absent (404)
    NotFound { message: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => {
                tracing::debug!("Validation error: {}", e);
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                })
            }
            Self::BadRequest { message } => {
                tracing::debug!("Bad request: {}", message);
                json!({
                    "error": "bad_request",
                    "message": message
                })
            }
            Self::NotFound { message } => {
                tracing::debug!("Not found: {}", message);
                json!({
                    "error": "not_found",
                    "message": message
                })
            }
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(e) => Self::Validation(e),
            CatalogError::Database(e) => Self::Database(e),
            CatalogError::UnknownCategoryId(_) => Self::BadRequest {
                message: e.to_string(),
            },
            CatalogError::CategoryNotFound(_)
            | CatalogError::ProductNotFound(_)
            | CatalogError::NoCategories
            | CatalogError::EmptyCategory(_) => Self::NotFound {
                message: e.to_string(),
            },
        }
    }
}
