use crate::common::{TestApp, ABSENT_ID};
use axum::http::StatusCode;

/// DELETE /api/notes/:id
#[tokio::test]
async fn test_delete_removes_the_note() {
    let app = TestApp::seeded();
    let note = app.store.first();
    let before = app.store.count();

    let res = app.delete(&format!("/api/notes/{}", note.id)).await;

    assert_eq!(res.status, StatusCode::NO_CONTENT);
    assert!(res.raw_body.is_empty());
    assert_eq!(app.store.count(), before - 1);
    assert!(app.store.get(note.id).is_none());
}

#[tokio::test]
async fn test_delete_unknown_id_returns_204() {
    let app = TestApp::seeded();

    let res = app.delete(&format!("/api/notes/{ABSENT_ID}")).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let lookup = app.get(&format!("/api/notes/{ABSENT_ID}")).await;
    assert_eq!(lookup.status, StatusCode::OK);
    assert!(lookup.body.is_null());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let app = TestApp::seeded();
    let note = app.store.first();
    let uri = format!("/api/notes/{}", note.id);

    assert_eq!(app.delete(&uri).await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.delete(&uri).await.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_malformed_id_goes_to_error_responder() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app.delete("/api/notes/000000000000000000000000").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.store.count(), before);
}
