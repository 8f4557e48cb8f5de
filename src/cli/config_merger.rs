//! Merges CLI argument overrides into file-based configuration

use super::parser::{Cli, Commands};
use crate::config::error::ConfigError;
use crate::config::{ConfigLoader, Settings};

/// Applies CLI overrides on top of loaded settings.
///
/// CLI arguments have the highest priority; `serve --log-level` wins over
/// the global `--verbose` / `--quiet` flags.
pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load base settings the way the CLI asks for.
    ///
    /// `--config` selects single file mode; otherwise the layered loader runs,
    /// with `--env` replacing `GAMECAT_APP_ENV`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config {
            Some(ref path) => ConfigLoader::from_file(path.clone()),
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    /// Returns a validated copy of the base settings with CLI overrides applied.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve(args)) = &cli.command {
            args.apply_to(&mut config);
        }

        config.validate()?;

        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn merger() -> ConfigurationMerger {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/test".to_string();
        ConfigurationMerger::new(config)
    }

    fn merge(args: &[&str]) -> Settings {
        let cli = Cli::try_parse_from(args).unwrap();
        merger().merge_cli_args(&cli).unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let merger = merger();
        let cli = Cli::try_parse_from(["game-catalog"]).unwrap();
        assert_eq!(&merger.merge_cli_args(&cli).unwrap(), merger.config());
    }

    #[test]
    fn test_global_log_flags() {
        assert_eq!(merge(&["game-catalog", "--verbose"]).logger.level, "debug");
        assert_eq!(merge(&["game-catalog", "--quiet"]).logger.level, "error");
    }

    #[test]
    fn test_serve_overrides() {
        let config = merge(&[
            "game-catalog",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
        ]);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn test_serve_log_level_beats_global_flag() {
        let config = merge(&["game-catalog", "--verbose", "serve", "--log-level", "warn"]);
        assert_eq!(config.logger.level, "warn");
    }

    #[test]
    fn test_migrate_does_not_touch_server() {
        let config = merge(&["game-catalog", "migrate", "--dry-run"]);
        assert_eq!(config.server, merger().config().server);
    }

    #[test]
    fn test_merged_settings_are_validated() {
        let merger = ConfigurationMerger::new(Settings::default());
        let cli = Cli::try_parse_from(["game-catalog"]).unwrap();
        // default settings use the postgres backend without a URL
        assert!(matches!(
            merger.merge_cli_args(&cli),
            Err(ConfigError::ValidationError { ref field, .. }) if field == "database.url"
        ));
    }
}
