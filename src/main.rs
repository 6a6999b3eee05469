use noteful_backend::{
    router::create_app_router,
    shutdown::{run_server_with_graceful_shutdown, GracefulShutdown},
    AppConfig, AppState, Environment,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env();

    init_tracing(&config);

    info!(environment = ?config.environment, "Starting Noteful Backend Server");

    info!("Initializing database connection...");
    let app_state = Arc::new(AppState::new(&config).await?);

    let app = create_app_router(app_state.clone());
    let shutdown = GracefulShutdown::new(app_state);

    run_server_with_graceful_shutdown(app, shutdown, &config.bind_address()).await?;

    info!("Server shut down complete");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("noteful_backend={},axum=info", config.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.environment == Environment::Production {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
