use super::*;

/// Tests creating a character with a valid name.
///
/// Expected: 200 with a public `id`, the name and empty attributes; internal
/// fields are never serialized.
#[tokio::test]
async fn creates_character_with_public_id() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/characters",
        Some(json!({ "name": "Frodo" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert_eq!(body["name"], "Frodo");
    assert_eq!(body["attributes"], json!({}));
    assert!(body.get("_id").is_none());
    assert!(body.get("__v").is_none());
}

/// Tests that only the name is taken from a create body.
///
/// Expected: 200 with attributes and the client-supplied id ignored
#[tokio::test]
async fn ignores_fields_other_than_name() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/characters",
        Some(json!({
            "name": "Samwise",
            "id": "5f1d7a2b9c3e4d5f6a7b8c9d",
            "attributes": { "role": "gardener" }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(body["id"], "5f1d7a2b9c3e4d5f6a7b8c9d");
    assert_eq!(body["attributes"], json!({}));
}

/// Tests that names shorter than three characters are rejected.
///
/// Expected: 400 with the validation message
#[tokio::test]
async fn rejects_short_name() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    for name in ["", "A", "Al"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/characters",
            Some(json!({ "name": name })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Character validation failed: name:"));
        assert!(error.contains("shorter than the minimum allowed length (3)"));
    }
}

/// Tests that a body without a name is rejected.
///
/// Expected: 400 with the required-field message
#[tokio::test]
async fn rejects_missing_name() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let (status, body) = send(&app, Method::POST, "/api/characters", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": "Character validation failed: name: Path `name` is required." })
    );
}

/// Tests that a body which is not JSON is reported as a JSON error.
///
/// Expected: 400 with an `error` field
#[tokio::test]
async fn rejects_malformed_body() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/characters")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"].is_string());
}

/// Tests that a rejected create writes nothing.
///
/// Expected: empty store after a validation failure
#[tokio::test]
async fn validation_failure_does_not_persist() {
    let (db, app) = setup(MissingCharacterPolicy::Null).await;

    send(
        &app,
        Method::POST,
        "/api/characters",
        Some(json!({ "name": "Al" })),
    )
    .await;

    use sea_orm::{EntityTrait, PaginatorTrait};
    let count = entity::prelude::Character::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

/// Tests that a scalar name is stored as its string form.
///
/// Expected: 200 with `"12345"` as the name
#[tokio::test]
async fn stores_numeric_name_as_string() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/characters",
        Some(json!({ "name": 12345 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "12345");
}

/// Tests that a short scalar name is validated after conversion.
///
/// Expected: 400 quoting the converted value
#[tokio::test]
async fn validates_converted_numeric_name() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/characters",
        Some(json!({ "name": 12 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "error": "Character validation failed: name: Path `name` (`12`) is shorter than the minimum allowed length (3)."
        })
    );
}
