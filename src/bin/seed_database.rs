use anyhow::Context;
use noteful_backend::{repositories::NoteRepository, seed::seed_notes, AppConfig, DatabaseManager};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Replaces every stored note with the bundled seed set.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let database = DatabaseManager::new(&config.database_url, 1)
        .await
        .context("failed to open database")?;

    let notes = seed_notes().context("bundled seed data is not valid JSON")?;
    let inserted = NoteRepository::new(database.pool().clone())
        .reseed(notes)
        .await
        .context("failed to seed notes")?;

    info!(count = inserted.len(), "Seeded notes");
    database.close().await;
    Ok(())
}
