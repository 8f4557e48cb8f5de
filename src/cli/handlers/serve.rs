//! Serve command handler

use crate::config::{Settings, StorageBackend};
use crate::error::AppResult;
use crate::server::Server;

pub struct ServeCommandHandler {
    config: Settings,
}

impl ServeCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Runs the server until shutdown, or only validates with `dry_run`.
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            return self.validate_only();
        }
        Server::new(self.config).run().await
    }

    /// Validate configuration and report what the server would do
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid");
        println!("✓ Server would bind to: {}", self.config.server.address());
        match self.config.database.backend {
            StorageBackend::Postgres => println!(
                "✓ Storage: postgres (pool {}..{} connections)",
                self.config.database.min_connections, self.config.database.max_connections
            ),
            StorageBackend::Memory => println!("✓ Storage: in-memory (data is lost on restart)"),
        }
        println!(
            "✓ API docs: {}",
            if self.config.api.docs_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("Dry run completed successfully");
        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
