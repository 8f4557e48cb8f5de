//! Migrate command handler

use crate::config::{Settings, StorageBackend};
use crate::db;
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Apply pending migrations, list them with `dry_run`, or revert the
    /// last `rollback` ones.
    ///
    /// The memory backend has no schema, so every mode is a no-op there.
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;

        if self.config.database.backend == StorageBackend::Memory {
            println!("Storage backend is 'memory'; there is no schema to migrate");
            return Ok(());
        }

        let url = &self.config.database.url;
        if dry_run {
            let pending = db::pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations found - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  - {}", name);
                }
                println!("\nRun without --dry-run to apply these migrations");
            }
        } else if let Some(steps) = rollback {
            println!("Rolling back {} migration(s)...", steps);
            let reverted = db::revert_migrations(url, steps).await?;
            for version in &reverted {
                println!("  - reverted {}", version);
            }
            println!("✓ Rolled back {} migration(s)", reverted.len());
        } else {
            println!("Running database migrations...");
            let applied = db::run_pending_migrations(url).await?;
            if applied.is_empty() {
                println!("✓ No migrations to apply - database is already up to date");
            } else {
                println!("✓ Applied {} migration(s):", applied.len());
                for version in &applied {
                    println!("  - {}", version);
                }
            }
        }

        Ok(())
    }
}
