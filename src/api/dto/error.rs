//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// One failing request field.
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldErrorDetail {
    pub field: String,
    pub message: String,
}

/// Standard error response format for boundary and infrastructure failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorDetail>,
}

impl ErrorResponse {
    /// Creates a new error response with code and message.
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            errors: Vec::new(),
        }
    }

    /// Attaches per-field validation failures.
    pub fn with_errors(mut self, errors: Vec<FieldErrorDetail>) -> Self {
        self.errors = errors;
        self
    }
}
