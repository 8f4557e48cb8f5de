//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration file is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// The merged sources do not deserialize into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A value is out of range or malformed
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// An environment variable holds an unusable value
    #[error("Environment variable error: {0}")]
    EnvVarError(String),

    /// Two options that cannot be combined were both given
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}
