use crate::error::StorageError;
use sqlx::migrate::MigrateDatabase;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use std::time::Duration;
use tracing::info;

/// Owns the process-wide PostgreSQL pool. Opened once before serving and
/// closed on shutdown.
#[derive(Debug, Clone)]
pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// Connect, creating the database if needed, and run the embedded
    /// migrations (notes table plus its title/created/full-text indexes).
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        if !Postgres::database_exists(database_url).await? {
            info!("Database does not exist, creating...");
            Postgres::create_database(database_url).await?;
            info!("Database created successfully");
        }

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await?;

        let manager = Self { pool };
        manager.migrate().await?;

        info!(max_connections, "Database connection pool initialized");
        Ok(manager)
    }

    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn health_check(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        info!("Closing database connections...");
        self.pool.close().await;
        info!("Database connections closed successfully");
    }
}
