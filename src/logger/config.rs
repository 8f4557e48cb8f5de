//! Validated logger settings, independent of the file/env configuration layer.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result, bail, ensure};
use tracing::Level;

const LEVELS: [(&str, Level); 5] = [
    ("trace", Level::TRACE),
    ("debug", Level::DEBUG),
    ("info", Level::INFO),
    ("warn", Level::WARN),
    ("error", Level::ERROR),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub console: ConsoleConfig,
    pub file: FileConfig,
    /// One of trace, debug, info, warn, error (any case)
    pub level: String,
}

impl LoggerConfig {
    pub fn new(console: ConsoleConfig, file: FileConfig, level: impl Into<String>) -> Result<Self> {
        let config = Self {
            console,
            file,
            level: level.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Level must parse, the file output must be coherent, and at least one
    /// output must be on.
    pub fn validate(&self) -> Result<()> {
        self.parse_level()?;
        self.file.validate().context("Invalid file configuration")?;
        ensure!(
            self.console.enabled || self.file.enabled,
            "At least one output (console or file) must be enabled"
        );
        Ok(())
    }

    pub fn parse_level(&self) -> Result<Level> {
        let wanted = self.level.to_lowercase();
        LEVELS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, level)| *level)
            .with_context(|| {
                format!(
                    "Invalid log level '{}'. Valid levels are: trace, debug, info, warn, error",
                    self.level
                )
            })
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: ConsoleConfig::default(),
            file: FileConfig::default(),
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// ANSI colors, only honored when stdout is a terminal
    pub colored: bool,
}

impl ConsoleConfig {
    pub fn new(enabled: bool, colored: bool) -> Self {
        Self { enabled, colored }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    pub enabled: bool,
    pub path: PathBuf,
    /// Truncate on startup when false
    pub append: bool,
    pub format: LogFormat,
}

impl FileConfig {
    pub fn new(enabled: bool, path: PathBuf, append: bool, format: LogFormat) -> Result<Self> {
        let config = Self {
            enabled,
            path,
            append,
            format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Pure check; the directory is created when the logger opens the file.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.enabled || !self.path.as_os_str().is_empty(),
            "File path cannot be empty when file output is enabled"
        );
        Ok(())
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: PathBuf::from("logs/game-catalog.log"),
            append: true,
            format: LogFormat::Json,
        }
    }
}

/// Line layout of the file output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Full,
    Compact,
    Json,
}

impl LogFormat {
    const ALL: [LogFormat; 3] = [LogFormat::Full, LogFormat::Compact, LogFormat::Json];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Full => "full",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        }
    }
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        match Self::ALL.into_iter().find(|f| f.as_str() == wanted) {
            Some(format) => Ok(format),
            None => bail!(
                "Invalid log format '{}'. Valid formats are: full, compact, json",
                s
            ),
        }
    }
}
