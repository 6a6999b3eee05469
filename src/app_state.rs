use crate::{
    database::DatabaseManager,
    repositories::{NoteRepository, NoteStore},
    services::NoteService,
};
use anyhow::Result;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub note_service: Arc<NoteService>,
    pub database: Option<DatabaseManager>,
}

impl AppState {
    /// Opens the database pool and wires the note service on top of it.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let database =
            DatabaseManager::new(&config.database_url, config.database_max_connections).await?;
        let note_repo = NoteRepository::new(database.pool().clone());

        Ok(Self {
            note_service: Arc::new(NoteService::new(Arc::new(note_repo))),
            database: Some(database),
        })
    }

    /// State backed by an arbitrary store, with no pool to manage.
    pub fn with_store(store: Arc<dyn NoteStore>) -> Self {
        Self {
            note_service: Arc::new(NoteService::new(store)),
            database: None,
        }
    }

    pub async fn graceful_shutdown(&self) {
        tracing::info!("Starting graceful shutdown...");

        if let Some(database) = &self.database {
            database.close().await;
        }

        tracing::info!("Graceful shutdown completed");
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub log_level: String,
    pub environment: Environment,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Development,
    Testing,
    Production,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgresql://localhost/noteful".to_string()),
            database_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            environment: match std::env::var("ENVIRONMENT").as_deref() {
                Ok("production") => Environment::Production,
                Ok("testing") => Environment::Testing,
                _ => Environment::Development,
            },
        }
    }
}
