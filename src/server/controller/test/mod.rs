use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{
    assets::StaticAssets, config::MissingCharacterPolicy, router::app, state::AppState,
};

mod character;

const MALFORMED_ID_BODY: &str = "Non-existing or malformatted id";

/// Builds the full application over a fresh in-memory store.
async fn setup(policy: MissingCharacterPolicy) -> (DatabaseConnection, Router) {
    setup_with_assets(policy, None).await
}

async fn setup_with_assets(
    policy: MissingCharacterPolicy,
    assets: Option<StaticAssets>,
) -> (DatabaseConnection, Router) {
    let test = TestBuilder::new()
        .with_character_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let app = app(AppState::new(
        db.clone(),
        Duration::from_secs(5),
        policy,
        assets,
    ));

    (db, app)
}

/// Sends a request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Creates a character through the API and returns its response body.
async fn create(app: &Router, name: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/characters",
        Some(json!({ "name": name })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}
