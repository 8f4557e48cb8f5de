//! Configuration loader for game-catalog
//!
//! `ConfigLoader` merges configuration files and environment variables with
//! a fixed precedence.

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "GAMECAT_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "GAMECAT_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "GAMECAT";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Layered configuration loader
///
/// Sources, lowest priority first:
/// 1. `default.toml` (required)
/// 2. `{environment}.toml` (optional)
/// 3. `local.toml` (optional)
/// 4. `GAMECAT_*` environment variables
///
/// In single file mode steps 1-3 are replaced by that one file.
#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// When set, skips layered loading
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `GAMECAT_CONFIG_DIR`, `GAMECAT_CONFIG_FILE` and
    /// `GAMECAT_APP_ENV`.
    ///
    /// # Errors
    ///
    /// Returns an error if both `GAMECAT_CONFIG_DIR` and `GAMECAT_CONFIG_FILE`
    /// are set.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_dir.is_some() && config_file.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "GAMECAT_CONFIG_DIR and GAMECAT_CONFIG_FILE cannot both be set. \
                 Use GAMECAT_CONFIG_DIR for layered configuration or \
                 GAMECAT_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Create a loader that reads a single file plus environment overrides.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(path.into()),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Override the environment read from `GAMECAT_APP_ENV`.
    pub fn with_environment(mut self, environment: AppEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Read every source, deserialize into [`Settings`] and validate.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let mut builder = Config::builder();
        for (path, required) in self.file_sources() {
            if required && !path.exists() {
                return Err(ConfigError::file_not_found(format!(
                    "Required configuration file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(required));
        }

        // GAMECAT_SERVER__PORT -> server.port
        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError(format!("Invalid configuration: {e}")))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Files to merge, lowest priority first, with their `required` flag.
    fn file_sources(&self) -> Vec<(PathBuf, bool)> {
        if let Some(file) = &self.config_file {
            return vec![(file.clone(), true)];
        }
        let dir = &self.config_dir;
        vec![
            (dir.join("default.toml"), true),
            (dir.join(format!("{}.toml", self.environment)), false),
            (dir.join("local.toml"), false),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::StorageBackend;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests mutate process environment variables
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const BASE_CONFIG: &str = r#"
[application]
name = "test-app"
version = "1.0.0"

[server]
host = "127.0.0.1"
port = 3000

[database]
backend = "postgres"
url = "postgres://localhost/test"
max_connections = 10
min_connections = 1

[logger]
level = "info"
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Restores touched environment variables on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            let mut guard = Self {
                vars_to_restore: Vec::new(),
            };
            for key in [
                CONFIG_DIR_ENV,
                CONFIG_FILE_ENV,
                AppEnvironment::ENV_VAR,
                "GAMECAT_SERVER__PORT",
                "GAMECAT_DATABASE__BACKEND",
            ] {
                guard.remove(key);
            }
            guard
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    #[test]
    fn test_config_loader_new_default() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir, PathBuf::from("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("GAMECAT_CONFIG_DIR"));
                assert!(msg.contains("GAMECAT_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let result = ConfigLoader::new().unwrap().load();
        match result {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let development_config = r#"
[application]
name = "dev-app"

[server]
port = 3001

[database]
url = "postgres://dev/db"
"#;
        let local_config = r#"
[server]
port = 3002

[database]
url = "postgres://local/db"
"#;
        let temp_dir = setup_config_dir(&[
            ("default.toml", BASE_CONFIG),
            ("development.toml", development_config),
            ("local.toml", local_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("GAMECAT_SERVER__PORT", "3003");

        let settings = ConfigLoader::new().unwrap().load().expect("Should load settings");

        assert_eq!(settings.server.port, 3003);
        assert_eq!(settings.database.url, "postgres://local/db");
        assert_eq!(settings.application.name, "dev-app");
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.application.version, "1.0.0");
    }

    #[test]
    fn test_with_environment_overrides_env_var() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();

        let test_config = r#"
[database]
backend = "memory"
"#;
        let temp_dir = setup_config_dir(&[
            ("default.toml", BASE_CONFIG),
            ("test.toml", test_config),
        ]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set(AppEnvironment::ENV_VAR, "production");

        let settings = ConfigLoader::new()
            .unwrap()
            .with_environment(AppEnvironment::Test)
            .load()
            .expect("Should load settings");

        assert_eq!(settings.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_env_var_selects_backend() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", BASE_CONFIG)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("GAMECAT_DATABASE__BACKEND", "memory");

        let settings = ConfigLoader::new().unwrap().load().unwrap();
        assert_eq!(settings.database.backend, StorageBackend::Memory);
    }

    #[test]
    fn test_load_single_file_mode() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let _env = EnvGuard::new();

        let single_config = r#"
[server]
host = "0.0.0.0"
port = 5000

[database]
backend = "memory"
"#;
        let temp_dir = setup_config_dir(&[
            ("single.toml", single_config),
            ("default.toml", BASE_CONFIG),
        ]);

        let settings = ConfigLoader::from_file(temp_dir.path().join("single.toml"))
            .load()
            .expect("Should load settings");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.database.backend, StorageBackend::Memory);
        assert_eq!(settings.application.name, "game-catalog");
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let _lock = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        let temp_dir = setup_config_dir(&[("default.toml", BASE_CONFIG)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());
        env.set("GAMECAT_SERVER__PORT", "0");

        let result = ConfigLoader::new().unwrap().load();
        assert!(matches!(
            result,
            Err(ConfigError::ValidationError { ref field, .. }) if field == "server.port"
        ));
    }
}
