use crate::{
    app_state::AppState,
    handlers::note,
    health::{basic_health_check, readiness_probe},
    middleware::logging::request_logging_middleware,
    services::NoteService,
};
use axum::{middleware, routing::get, Router};
use std::sync::Arc;

/// Full application: health endpoints, the notes API under `/api`, a JSON
/// 404 fallback and request logging.
pub fn create_app_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes(app_state.clone()))
        .nest("/api", note_routes(app_state.note_service.clone()))
        .fallback(note::not_found)
        .layer(middleware::from_fn(request_logging_middleware))
}

fn health_routes(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(basic_health_check))
        .route("/health/ready", get(readiness_probe))
        .with_state(app_state)
}

pub fn note_routes(note_service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/notes", get(note::list_notes).post(note::create_note))
        .route("/notes/search", get(note::search_notes))
        .route(
            "/notes/:id",
            get(note::get_note)
                .put(note::update_note)
                .delete(note::delete_note),
        )
        .with_state(note_service)
}
