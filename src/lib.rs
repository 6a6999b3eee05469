//! Noteful Backend
//!
//! Minimal note-taking REST API built with Rust, Axum and PostgreSQL.
//! Notes can be listed (optionally filtered by title), fetched, created,
//! updated, deleted and searched by full text.
//!
//! ## Architecture
//!
//! - **Models**: the note entity, request payloads and validation
//! - **Repositories**: the [`repositories::NoteStore`] seam and its PostgreSQL implementation
//! - **Services**: validation ahead of the single storage call per operation
//! - **Handlers**: HTTP request/response handling
//! - **Middleware**: request logging
//! - **Router**: API endpoint routing and composition
//!
//! ## Quick Start
//!
//! ```no_run
//! use noteful_backend::{router::create_app_router, AppConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env();
//!     let app_state = std::sync::Arc::new(AppState::new(&config).await?);
//!     let app = create_app_router(app_state);
//!
//!     let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod repositories;
pub mod services;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod app_state;
pub mod health;
pub mod shutdown;
pub mod database;
pub mod error;
pub mod seed;

// Re-export commonly used types
pub use app_state::{AppConfig, AppState, Environment};
pub use database::DatabaseManager;
pub use error::{AppError, StorageError};
