//! Typed view of the merged configuration.
//!
//! Every section deserializes with `#[serde(default)]`, so a TOML file or an
//! environment override only has to name the keys it changes.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;
use crate::logger::{ConsoleConfig, FileConfig, LogFormat, LoggerConfig};

/// `[application]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: "game-catalog".to_string(),
            version: crate::pkg_version().to_string(),
        }
    }
}

/// `[server]`, timeouts in seconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: u64,
    pub keep_alive_timeout: u64,
}

impl ServerConfig {
    /// `host:port` as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: 30,
            keep_alive_timeout: 75,
        }
    }
}

/// Where games are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// PostgreSQL through the bb8 pool
    #[default]
    Postgres,
    /// Process-local store, lost on restart
    Memory,
}

/// `[database]`
///
/// `url` and the pool sizes only matter for the postgres backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub backend: StorageBackend,
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Pool acquisition timeout in seconds
    pub connection_timeout: u64,
    /// Apply pending migrations before serving
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Postgres,
            url: String::new(),
            max_connections: 10,
            min_connections: 1,
            connection_timeout: 30,
            auto_migrate: false,
        }
    }
}

/// `[logger.console]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    pub enabled: bool,
    pub colored: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

/// `[logger.file]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSettings {
    pub enabled: bool,
    pub path: String,
    pub append: bool,
    /// "full", "compact" or "json"
    pub format: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            path: "logs/game-catalog.log".to_string(),
            append: true,
            format: "json".to_string(),
        }
    }
}

/// `[logger]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// "trace", "debug", "info", "warn" or "error"
    pub level: String,
    pub console: ConsoleSettings,
    pub file: FileSettings,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            console: ConsoleSettings::default(),
            file: FileSettings::default(),
        }
    }
}

impl LoggerSettings {
    /// Convert the file representation into the runtime `LoggerConfig`.
    pub fn into_logger_config(self) -> Result<LoggerConfig, ConfigError> {
        let format = self
            .file
            .format
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::validation("logger.file.format", e.to_string()))?;

        let file = FileConfig::new(
            self.file.enabled,
            PathBuf::from(self.file.path),
            self.file.append,
            format,
        )
        .map_err(|e| ConfigError::validation("logger.file", e.to_string()))?;
        let console = ConsoleConfig::new(self.console.enabled, self.console.colored);

        LoggerConfig::new(console, file, self.level)
            .map_err(|e| ConfigError::validation("logger", e.to_string()))
    }
}

/// `[api]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Serve Swagger UI and the OpenAPI document
    pub docs_enabled: bool,
    /// Answer CORS preflights for any origin
    pub cors_allow_any: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            docs_enabled: true,
            cors_allow_any: false,
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub application: ApplicationConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logger: LoggerSettings,
    pub api: ApiConfig,
}
