//! Database connection and schema management.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Handle to the connection pool, plus the schema operations the CLI
/// drives. Services never see this type; they get a plain
/// [`DatabaseConnection`] clone.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool without touching the schema.
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(&config.database_url).await?;
        Ok(Self { connection })
    }

    /// Open the connection pool and bring the schema up to date.
    pub async fn connect_and_migrate(config: &Config) -> Result<Self, DbErr> {
        let db = Self::connect(config).await?;
        Migrator::up(&db.connection, None).await?;
        tracing::info!("Database connected, schema up to date");
        Ok(db)
    }

    /// Clone of the pooled connection for handing to services.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn apply_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent applied migration.
    pub async fn revert_last_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Names of migrations that have not been applied yet.
    pub async fn pending_migrations(&self) -> Result<Vec<String>, DbErr> {
        let pending = Migrator::get_pending_migrations(&self.connection).await?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    }

    /// Drop everything and rebuild the schema from scratch.
    pub async fn reset_schema(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}
