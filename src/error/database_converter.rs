use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Name of the unique index guarding the (name, producer) pair.
pub const GAME_NAME_PRODUCER_CONSTRAINT: &str = "games_name_producer_key";

/// Utility for converting database errors to structured AppError variants.
///
/// A unique violation on the (name, producer) index is the storage-level
/// counterpart of the service duplicate check, so it becomes
/// `GameAlreadyRegistered`. Everything else stays an infrastructure error.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an appropriate AppError variant.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => {
                Self::convert_database_error(kind, info.as_ref(), operation)
            }
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }

    fn convert_database_error(
        kind: DatabaseErrorKind,
        info: &(dyn diesel::result::DatabaseErrorInformation + Send + Sync),
        operation: &str,
    ) -> AppError {
        let message = info.message();

        match kind {
            DatabaseErrorKind::UniqueViolation
                if Self::is_name_producer_violation(info.constraint_name(), message) =>
            {
                AppError::GameAlreadyRegistered
            }
            DatabaseErrorKind::UniqueViolation => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Unique constraint violation: {}", message)),
            },
            DatabaseErrorKind::CheckViolation => AppError::Validation {
                field: info.constraint_name().unwrap_or("games").to_string(),
                reason: "Check constraint failed".to_string(),
            },
            _ => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::msg(format!("Database error: {}", message)),
            },
        }
    }

    fn is_name_producer_violation(constraint_name: Option<&str>, message: &str) -> bool {
        match constraint_name {
            Some(name) => name == GAME_NAME_PRODUCER_CONSTRAINT,
            None => message.contains(GAME_NAME_PRODUCER_CONSTRAINT),
        }
    }
}
