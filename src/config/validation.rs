//! Range and format checks run after the configuration is deserialized.
//!
//! Each `validate` returns the first failing rule as
//! `ConfigError::ValidationError` naming the dotted key at fault.

use crate::config::error::ConfigError;
use crate::config::settings::{
    DatabaseConfig, FileSettings, LoggerSettings, ServerConfig, Settings, StorageBackend,
};

const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

/// URL schemes accepted by the postgres backend
const VALID_URL_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

fn ensure(condition: bool, field: &str, message: impl Into<String>) -> Result<(), ConfigError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigError::validation(field, message))
    }
}

fn one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value.to_lowercase().as_str())
}

impl ServerConfig {
    /// Port in 1..=65535 and non-zero timeouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            self.port != 0,
            "server.port",
            "Port must be between 1 and 65535",
        )?;
        ensure(
            self.request_timeout > 0,
            "server.request_timeout",
            "Request timeout must be greater than 0 seconds",
        )?;
        ensure(
            self.keep_alive_timeout > 0,
            "server.keep_alive_timeout",
            "Keep-alive timeout must be greater than 0 seconds",
        )
    }
}

impl DatabaseConfig {
    /// Pool bounds always; a postgres URL only when that backend is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend == StorageBackend::Postgres {
            ensure(
                !self.url.is_empty(),
                "database.url",
                "Database URL is required for the postgres backend",
            )?;
            ensure(
                VALID_URL_SCHEMES
                    .iter()
                    .any(|scheme| self.url.starts_with(scheme)),
                "database.url",
                "Expected format: postgres://[user:password@]host[:port]/database",
            )?;
        }

        ensure(
            self.max_connections > 0,
            "database.max_connections",
            "Max connections must be greater than 0",
        )?;
        ensure(
            self.min_connections > 0,
            "database.min_connections",
            "Min connections must be greater than 0",
        )?;
        ensure(
            self.min_connections <= self.max_connections,
            "database.min_connections",
            format!(
                "Min connections ({}) cannot exceed max connections ({})",
                self.min_connections, self.max_connections
            ),
        )
    }
}

impl FileSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            !self.enabled || !self.path.trim().is_empty(),
            "logger.file.path",
            "File path is required when file logging is enabled",
        )?;
        ensure(
            one_of(&self.format, VALID_LOG_FORMATS),
            "logger.file.format",
            format!(
                "Invalid log format '{}'. Valid formats are: {}",
                self.format,
                VALID_LOG_FORMATS.join(", ")
            ),
        )
    }
}

impl LoggerSettings {
    /// Known level, plus the file output rules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            one_of(&self.level, VALID_LOG_LEVELS),
            "logger.level",
            format!(
                "Invalid log level '{}'. Valid levels are: {}",
                self.level,
                VALID_LOG_LEVELS.join(", ")
            ),
        )?;
        self.file.validate()
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()
    }
}
