use crate::common::{TestApp, MISSING_TITLE};
use axum::http::{header, Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

/// POST /api/notes
#[tokio::test]
async fn test_create_note_returns_201_with_location() {
    let app = TestApp::seeded();
    let new_item = json!({
        "title": "The best article about cats ever!",
        "content": "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor...",
        "tags": []
    });

    let res = app.post("/api/notes", new_item.clone()).await;

    assert_eq!(res.status, StatusCode::CREATED);
    let id: Uuid = res.body["id"].as_str().unwrap().parse().unwrap();
    assert_eq!(
        res.headers[header::LOCATION].to_str().unwrap(),
        format!("/api/notes/{id}")
    );
    assert_eq!(res.body["title"], new_item["title"]);
    assert_eq!(res.body["content"], new_item["content"]);
    assert!(res.body["created"].is_string());
    assert!(res.body.get("tags").is_none());

    let stored = app.store.get(id).unwrap();
    assert_eq!(stored.title, new_item["title"]);
    assert_eq!(stored.content, new_item["content"]);
}

#[tokio::test]
async fn test_created_ids_are_unique() {
    let app = TestApp::seeded();

    let a = app.post("/api/notes", json!({"title": "A", "content": "a"})).await;
    let b = app.post("/api/notes", json!({"title": "A", "content": "a"})).await;

    assert_ne!(a.body["id"], b.body["id"]);
}

#[tokio::test]
async fn test_create_without_title_returns_400() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app.post("/api/notes", json!({"foo": "bar"})).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.headers["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    assert_eq!(res.body["message"], MISSING_TITLE);
    assert_eq!(app.store.count(), before);
}

#[tokio::test]
async fn test_create_with_empty_title_returns_400() {
    let app = TestApp::seeded();

    let res = app
        .post("/api/notes", json!({"title": "", "content": "Body"}))
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], MISSING_TITLE);
}

#[tokio::test]
async fn test_create_without_content_is_a_storage_error() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app.post("/api/notes", json!({"title": "Only a title"})).await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.body["message"].is_string());
    assert_eq!(app.store.count(), before);
}

#[tokio::test]
async fn test_create_with_malformed_json_is_rejected() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app
        .request_raw(
            Method::POST,
            "/api/notes",
            Some("application/json"),
            "{not json".to_string(),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert!(res.body["message"].is_string());
    assert_eq!(app.store.count(), before);
}

#[tokio::test]
async fn test_create_with_empty_body_returns_missing_title() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app
        .request_raw(Method::POST, "/api/notes", None, String::new())
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], MISSING_TITLE);
    assert_eq!(app.store.count(), before);
}

#[tokio::test]
async fn test_create_with_empty_json_body_returns_missing_title() {
    let app = TestApp::seeded();

    let res = app
        .request_raw(
            Method::POST,
            "/api/notes",
            Some("application/json"),
            String::new(),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], MISSING_TITLE);
}

#[tokio::test]
async fn test_create_with_form_body_returns_missing_title() {
    let app = TestApp::seeded();
    let before = app.store.count();

    let res = app
        .request_raw(
            Method::POST,
            "/api/notes",
            Some("application/x-www-form-urlencoded"),
            "title=Cats&content=Body".to_string(),
        )
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["message"], MISSING_TITLE);
    assert_eq!(app.store.count(), before);
}
