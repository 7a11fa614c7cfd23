//! Migrate command - schema management from the command line.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Schema changes stay explicit here; only `serve` migrates on boot.
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.apply_migrations().await.map_err(to_internal)?;
            tracing::info!("Schema is up to date");
        }
        MigrateAction::Down => {
            db.revert_last_migration().await.map_err(to_internal)?;
            tracing::info!("Reverted the last migration");
        }
        MigrateAction::Status => {
            let pending = db.pending_migrations().await.map_err(to_internal)?;
            if pending.is_empty() {
                println!("No pending migrations.");
            } else {
                for name in pending {
                    println!("pending: {}", name);
                }
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables before rebuilding the schema");
            db.reset_schema().await.map_err(to_internal)?;
            tracing::info!("Schema rebuilt from scratch");
        }
    }

    Ok(())
}

fn to_internal(e: sea_orm::DbErr) -> AppError {
    AppError::internal(e.to_string())
}
