//! Command line surface: global flags plus the `serve` and `migrate` subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::validation::{
    validate_config_file_path, validate_host_address, validate_port, validate_rollback_steps,
};
use crate::config::Settings;

const AFTER_HELP: &str = "\
Examples:
  game-catalog                                   serve with layered config/ files
  game-catalog --env prod serve --port 8080      production profile, custom port
  game-catalog -c ./catalog.toml serve --dry-run check a single file and exit
  game-catalog migrate --rollback 1              revert the newest migration";

/// Paginated CRUD API over a catalog of games (name, producer, price),
/// stored in PostgreSQL or in process memory.
#[derive(Parser, Debug)]
#[command(name = "game-catalog", version = crate::clap_long_version(), after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read this TOML file instead of the layered files under `config/`
    #[arg(short, long, value_name = "FILE", value_parser = validate_config_file_path)]
    pub config: Option<PathBuf>,

    /// Profile to load, replaces `GAMECAT_APP_ENV`
    #[arg(short, long, value_enum)]
    pub env: Option<Environment>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server (the default when no subcommand is given)
    Serve(ServeArgs),
    /// Apply, list or revert database migrations
    Migrate(MigrateArgs),
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Bind address, overrides `server.host`
    #[arg(long, value_name = "ADDRESS", value_parser = validate_host_address)]
    pub host: Option<String>,

    /// Listen port, overrides `server.port`
    #[arg(short, long, value_name = "PORT", value_parser = validate_port)]
    pub port: Option<u16>,

    /// Wins over --verbose and --quiet
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Print the checked configuration and exit
    #[arg(long)]
    pub dry_run: bool,
}

impl ServeArgs {
    /// Write the flags that were given into `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
        if let Some(level) = self.log_level {
            settings.logger.level = level.as_str().to_string();
        }
    }
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrateArgs {
    /// List pending migrations without applying them
    #[arg(long, conflicts_with = "rollback")]
    pub dry_run: bool,

    /// Revert this many applied migrations (1-100)
    #[arg(long, value_name = "STEPS", value_parser = validate_rollback_steps)]
    pub rollback: Option<u32>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl From<Environment> for crate::config::Environment {
    fn from(env: Environment) -> Self {
        use crate::config::Environment as Profile;
        match env {
            Environment::Development => Profile::Development,
            Environment::Test => Profile::Test,
            Environment::Staging => Profile::Staging,
            Environment::Production => Profile::Production,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    #[value(alias = "warning")]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
