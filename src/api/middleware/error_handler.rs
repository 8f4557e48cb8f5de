//! Error handler for converting AppError to HTTP responses.
//!
//! Catalog outcomes are rendered as plain text, everything else as a
//! structured `ErrorResponse`. Infrastructure failures are logged here and
//! never expose their source to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::{ErrorResponse, FieldErrorDetail};
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - GameAlreadyRegistered → 422 UNPROCESSABLE_ENTITY (text)
    /// - GameNotRegistered → 404 NOT_FOUND (text)
    /// - Validation / ValidationErrors / BadRequest → 400 BAD_REQUEST
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    /// - Database / Configuration / Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        let error_response = match &self {
            AppError::GameAlreadyRegistered | AppError::GameNotRegistered { .. } => {
                return (status, self.to_string()).into_response();
            }
            AppError::Validation { field, reason } => {
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed").with_errors(
                    vec![FieldErrorDetail {
                        field: field.clone(),
                        message: reason.clone(),
                    }],
                )
            }
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed").with_errors(
                    errors
                        .iter()
                        .map(|e| FieldErrorDetail {
                            field: e.field.clone(),
                            message: e.message.clone(),
                        })
                        .collect(),
                )
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Database operation failed");
                ErrorResponse::new("DATABASE_ERROR", "Database operation failed")
            }
            AppError::Configuration { key, source } => {
                tracing::error!(key = %key, error = %source, "Configuration error");
                ErrorResponse::new("CONFIGURATION_ERROR", "Server misconfigured")
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool unavailable");
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
            }
            AppError::Internal { source } => {
                tracing::error!(error = ?source, "Internal error");
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::GameAlreadyRegistered => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::GameNotRegistered { .. } => StatusCode::NOT_FOUND,
        AppError::Validation { .. }
        | AppError::ValidationErrors { .. }
        | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Database { .. } | AppError::Configuration { .. } | AppError::Internal { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
