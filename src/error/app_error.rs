use crate::error::DatabaseErrorConverter;
use thiserror::Error;
use uuid::Uuid;

/// A single field failure produced by request validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFieldError {
    pub field: String,
    pub message: String,
}

/// Application-wide error type.
///
/// The two catalog variants are expected business outcomes and are rendered
/// as plain text at the HTTP boundary. Everything else is either a boundary
/// rejection (400) or an infrastructure failure (5xx).
#[derive(Error, Debug)]
pub enum AppError {
    /// A game with the same name and producer already exists
    #[error("There is already a registered game with that name for this producer")]
    GameAlreadyRegistered,

    /// The referenced game id does not exist
    #[error("Game not found")]
    GameNotRegistered { id: Uuid },

    /// Single field validation failure
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Validation failure across one or more request fields
    #[error("Validation failed for {} field(s)", errors.len())]
    ValidationErrors { errors: Vec<ValidationFieldError> },

    /// Malformed request (bad JSON, bad path or query parameters)
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<diesel_async::pooled_connection::PoolError>> for AppError {
    fn from(error: bb8::RunError<diesel_async::pooled_connection::PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::msg(error.to_string()),
        }
    }
}

impl From<crate::config::error::ConfigError> for AppError {
    fn from(error: crate::config::error::ConfigError) -> Self {
        let key = match &error {
            crate::config::error::ConfigError::ValidationError { field, .. } => field.clone(),
            _ => "configuration".to_string(),
        };
        AppError::Configuration {
            key,
            source: anyhow::Error::new(error),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut collected: Vec<ValidationFieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, failures)| {
                failures.iter().map(move |failure| ValidationFieldError {
                    field: field.to_string(),
                    message: failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", failure.code)),
                })
            })
            .collect();
        collected.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationErrors { errors: collected }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
