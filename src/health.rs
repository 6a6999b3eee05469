use crate::app_state::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

pub async fn basic_health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "noteful-backend",
        "version": env!("CARGO_PKG_VERSION"),
        "build": {
            "git_commit": env!("GIT_COMMIT"),
            "build_timestamp": env!("BUILD_TIMESTAMP"),
            "rust_version": env!("RUSTC_VERSION")
        }
    }))
}

pub async fn readiness_probe(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let start = std::time::Instant::now();

    match app_state.note_service.ping().await {
        Ok(()) => Ok(Json(json!({
            "status": "ready",
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "checks": {
                "storage": {
                    "status": "healthy",
                    "response_time_ms": start.elapsed().as_millis()
                }
            }
        }))),
        Err(e) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "checks": {
                    "storage": {
                        "status": "unhealthy",
                        "error": e.to_string(),
                        "response_time_ms": start.elapsed().as_millis()
                    }
                }
            })),
        )),
    }
}
