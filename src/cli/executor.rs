//! Dispatches parsed CLI commands

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Execute the parsed command with merged settings.
///
/// No subcommand means `serve`. Returns once the server has shut down or
/// the one-shot command has finished.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Serve(args)) => {
            ServeCommandHandler::new(settings).execute(args.dry_run).await
        }
        None => ServeCommandHandler::new(settings).execute(false).await,
        Some(Commands::Migrate(args)) => {
            if let Some(steps) = args.rollback
                && steps > 50
            {
                tracing::warn!(steps, "Rolling back a large number of migrations");
            }
            MigrateCommandHandler::new(settings)
                .execute(args.dry_run, args.rollback)
                .await
        }
    }
}
