use crate::app_state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::{info, warn};

/// Serves `app` until Ctrl+C/SIGTERM, then closes the storage pool.
pub struct GracefulShutdown {
    app_state: Arc<AppState>,
    shutdown_timeout: Duration,
}

impl GracefulShutdown {
    pub fn new(app_state: Arc<AppState>) -> Self {
        Self {
            app_state,
            shutdown_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.shutdown_timeout
    }

    async fn release_resources(&self) {
        let shutdown_start = std::time::Instant::now();

        match tokio::time::timeout(self.shutdown_timeout, self.app_state.graceful_shutdown()).await
        {
            Ok(()) => info!("Resources released in {:?}", shutdown_start.elapsed()),
            Err(_) => warn!(
                "Graceful shutdown timed out after {:?}, forcing exit",
                self.shutdown_timeout
            ),
        }
    }
}

/// Resolves on the first Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C signal");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received SIGTERM signal");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

pub async fn run_server_with_graceful_shutdown(
    app: axum::Router,
    shutdown: GracefulShutdown,
    bind_addr: &str,
) -> anyhow::Result<()> {
    info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown.release_resources().await;
    Ok(())
}
