//! Embedded schema migrations.
//!
//! diesel_migrations only drives synchronous connections, so every
//! operation opens a blocking `PgConnection` inside `spawn_blocking`.

use diesel::Connection;
use diesel::migration::Migration;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::error::{AppError, AppResult};

/// Schema migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

async fn with_blocking_connection<T, F>(
    database_url: &str,
    purpose: &'static str,
    f: F,
) -> AppResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
{
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
            operation: format!("establish connection for {}", purpose),
            source: anyhow::anyhow!("Connection error: {}", e),
        })?;
        f(&mut conn)
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

fn migration_error(operation: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Database {
        operation: operation.to_string(),
        source: anyhow::anyhow!("Migration error: {}", e),
    }
}

/// Lists migrations that have not been applied yet.
pub async fn pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    with_blocking_connection(database_url, "migration check", |conn| {
        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| migration_error("check pending migrations", e))?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    })
    .await
}

/// Applies every pending migration and returns the applied versions.
pub async fn run_pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    with_blocking_connection(database_url, "migrations", |conn| {
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| migration_error("run pending migrations", e))?;
        Ok(applied.iter().map(|m| m.to_string()).collect())
    })
    .await
}

/// Reverts the `steps` most recent migrations, newest first.
///
/// Fails without reverting anything when fewer than `steps` are applied.
pub async fn revert_migrations(database_url: &str, steps: u32) -> AppResult<Vec<String>> {
    if steps == 0 {
        return Err(AppError::Validation {
            field: "rollback_steps".to_string(),
            reason: "Number of rollback steps must be greater than 0".to_string(),
        });
    }

    with_blocking_connection(database_url, "rollback", move |conn| {
        let applied = conn
            .applied_migrations()
            .map_err(|e| migration_error("get applied migrations", e))?;

        if applied.len() < steps as usize {
            return Err(AppError::Validation {
                field: "rollback_steps".to_string(),
                reason: format!(
                    "Cannot rollback {} migrations - only {} applied migrations available",
                    steps,
                    applied.len()
                ),
            });
        }

        let mut reverted = Vec::with_capacity(steps as usize);
        for _ in 0..steps {
            let version = conn
                .revert_last_migration(MIGRATIONS)
                .map_err(|e| migration_error("revert migration", e))?;
            reverted.push(version.to_string());
        }
        Ok(reverted)
    })
    .await
}
