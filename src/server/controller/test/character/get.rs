use super::*;

/// Tests that a created character can be fetched back unchanged.
///
/// Expected: 200 with the same id, name and attributes
#[tokio::test]
async fn round_trips_created_character() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;
    let created = create(&app, "Aragorn").await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/characters/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
}

/// Tests fetching a seeded character with attributes.
///
/// Expected: 200 with attributes as a string map
#[tokio::test]
async fn returns_stored_attributes() {
    let (db, app) = setup(MissingCharacterPolicy::Null).await;
    let seeded = factory::character::CharacterFactory::new(&db)
        .name("Gimli")
        .attribute("race", "dwarf")
        .attribute("weapon", "axe")
        .build()
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/characters/{}", seeded.id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": seeded.id,
            "name": "Gimli",
            "attributes": { "race": "dwarf", "weapon": "axe" }
        })
    );
}

/// Tests that ids which are not 24 hexadecimal characters are rejected.
///
/// Expected: 400 with the fixed malformed-id message
#[tokio::test]
async fn rejects_malformed_ids() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    for id in ["123", "not-an-id", "5f1d7a2b9c3e4d5f6a7b8c9g", "5f1d7a2b9c3e4d5f6a7b8c9d00"] {
        let (status, body) = send(&app, Method::GET, &format!("/api/characters/{id}"), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(body, json!({ "error": MALFORMED_ID_BODY }));
    }
}

/// Tests the default answer for a well-formed id matching nothing.
///
/// Expected: 200 with a `null` body
#[tokio::test]
async fn unknown_id_returns_null_by_default() {
    let (db, app) = setup(MissingCharacterPolicy::Null).await;
    factory::create_character(&db).await.unwrap();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/characters/ffffffffffffffffffffffff",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

/// Tests the strict answer for a well-formed id matching nothing.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn unknown_id_returns_404_when_strict() {
    let (_db, app) = setup(MissingCharacterPolicy::NotFound).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/characters/ffffffffffffffffffffffff",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "character not found" }));
}

/// Tests that a malformed id is still a 400 under the strict policy.
///
/// Expected: 400 with the fixed malformed-id message
#[tokio::test]
async fn malformed_id_is_400_when_strict() {
    let (_db, app) = setup(MissingCharacterPolicy::NotFound).await;

    let (status, body) = send(&app, Method::GET, "/api/characters/nope", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": MALFORMED_ID_BODY }));
}

/// Tests ids that do not percent-decode to UTF-8.
///
/// Expected: 400 JSON body with the fixed malformed-id message
#[tokio::test]
async fn rejects_undecodable_ids() {
    let (_db, app) = setup(MissingCharacterPolicy::Null).await;

    for id in ["%FF", "%FF%FE", "5f1d7a2b9c3e4d5f6a7b8c%C3"] {
        let (status, body) = send(&app, Method::GET, &format!("/api/characters/{id}"), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "id {id}");
        assert_eq!(body, json!({ "error": MALFORMED_ID_BODY }));
    }
}
