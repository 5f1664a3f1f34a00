//! Database module providing connection management, migrations, and queries.
//!
//! Each entity gets its own file with an `impl DbPool` block; reports and
//! charts are raw SQL aggregations mapped through `FromQueryResult`.

pub mod bugs;
pub mod charts;
pub mod projects;
pub mod reports;
pub mod seed;
pub mod sql;
pub mod sub_projects;
pub mod test_cases;
pub mod test_executions;
pub mod test_suites;
pub mod testers;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// Database connection pool wrapper.
///
/// `DatabaseConnection` is itself a pooled handle and cheap to clone.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let settings = &config.database;

        let mut options = ConnectOptions::new(settings.url.clone());
        options
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        info!(
            max_connections = settings.max_connections,
            min_connections = settings.min_connections,
            "Database pool created"
        );

        Ok(Self { conn })
    }

    /// Wrap an existing connection (used by tests with a mock database).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Apply all pending schema migrations.
    pub async fn run_migrations(&self) -> AppResult<()> {
        Migrator::up(self.connection(), None)
            .await
            .map_err(|e| AppError::Database(format!("Failed to run migrations: {}", e)))
    }
}
