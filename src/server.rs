//! HTTP server lifecycle: storage setup, binding and graceful shutdown.

use tokio::net::TcpListener;
use tokio::signal;

use crate::api::routes::create_router;
use crate::config::{Environment, Settings, StorageBackend};
use crate::db::{establish_async_connection_pool, run_pending_migrations};
use crate::error::{AppError, AppResult};
use crate::repositories::Repositories;
use crate::state::AppState;

pub struct Server {
    settings: Settings,
}

impl Server {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Start the server and run until a shutdown signal arrives.
    ///
    /// # Errors
    /// - Migration or connection pool failures (postgres backend)
    /// - Address binding errors
    /// - Server runtime errors
    pub async fn run(self) -> AppResult<()> {
        let settings = &self.settings;

        tracing::info!(
            app_name = %settings.application.name,
            app_version = %settings.application.version,
            environment = %Environment::from_env(),
            "Application starting"
        );

        tracing::info!(
            host = %settings.server.host,
            port = settings.server.port,
            request_timeout = settings.server.request_timeout,
            keep_alive_timeout = settings.server.keep_alive_timeout,
            "Server configuration loaded"
        );

        let repositories = self.build_repositories().await?;
        let state = AppState::new(repositories, settings.application.version.clone());
        let router = create_router(state, &settings.api);

        let address = settings.server.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind to address");
            AppError::Internal {
                source: anyhow::anyhow!("Failed to bind to {}: {}", address, e),
            }
        })?;

        tracing::info!(
            address = %address,
            docs_enabled = settings.api.docs_enabled,
            "Server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Internal {
                source: anyhow::Error::from(e),
            })?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }

    async fn build_repositories(&self) -> AppResult<Repositories> {
        let database = &self.settings.database;

        match database.backend {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Repositories::in_memory())
            }
            StorageBackend::Postgres => {
                if database.auto_migrate {
                    let applied = run_pending_migrations(&database.url).await?;
                    tracing::info!(count = applied.len(), "Pending migrations applied");
                }

                tracing::info!(
                    max_connections = database.max_connections,
                    min_connections = database.min_connections,
                    connection_timeout = database.connection_timeout,
                    "Initializing database connection pool"
                );
                let pool = establish_async_connection_pool(database).await?;
                Ok(Repositories::new(pool))
            }
        }
    }
}

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the error is logged and that signal
/// source never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
