use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        config::MissingCharacterPolicy,
        error::{character::CharacterError, AppError},
        model::character::{Character, CreateCharacterParam, ReplaceCharacterParam},
        service::character::CharacterService,
        state::AppState,
        util::object_id::ObjectId,
    },
};

/// Tag for grouping character endpoints in OpenAPI documentation
pub static CHARACTER_TAG: &str = "character";

/// Create a new character.
///
/// Only `name` is taken from the body; the store assigns the id and the character starts
/// without attributes.
///
/// # Returns
/// - `200 OK` - The created character
/// - `400 Bad Request` - Missing or too short name, or a malformed body
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "Successfully created character", body = CharacterDto),
        (status = 400, description = "Invalid character data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Store did not respond in time", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    payload: Result<Json<CreateCharacterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let param = CreateCharacterParam::from_dto(payload)?;
    let character = CharacterService::new(&state.db, state.store_timeout)
        .create(param)
        .await?;

    Ok((StatusCode::OK, Json(character.into_dto())))
}

/// Get a character by id.
///
/// A well-formed id that matches nothing is answered according to the configured
/// `MissingCharacterPolicy`: `200 OK` with `null` by default.
///
/// # Returns
/// - `200 OK` - The character, or `null` when none matches
/// - `400 Bad Request` - The id is not a valid document key
/// - `404 Not Found` - No character matches and the strict policy is active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = String, Path, description = "24 character hexadecimal character id")
    ),
    responses(
        (status = 200, description = "Character, or null when none matches", body = CharacterDto),
        (status = 400, description = "Malformed id", body = ErrorDto),
        (status = 404, description = "Character not found (strict policy only)", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Store did not respond in time", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(id)?;

    let character = CharacterService::new(&state.db, state.store_timeout)
        .get(id)
        .await?;

    respond_with(state.missing_character, character)
}

/// Replace a character by id.
///
/// The body is a full replacement: `name` is required and validated, absent `attributes`
/// clear the stored map. Any `id` in the body is ignored.
///
/// # Returns
/// - `200 OK` - The updated character, or `null` when none matches
/// - `400 Bad Request` - Malformed id, invalid name or malformed body
/// - `404 Not Found` - No character matches and the strict policy is active
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/characters/{id}",
    tag = CHARACTER_TAG,
    params(
        ("id" = String, Path, description = "24 character hexadecimal character id")
    ),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "Updated character, or null when none matches", body = CharacterDto),
        (status = 400, description = "Malformed id or invalid character data", body = ErrorDto),
        (status = 404, description = "Character not found (strict policy only)", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 503, description = "Store did not respond in time", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    payload: Result<Json<UpdateCharacterDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let id = parse_id(id)?;
    let Json(payload) = payload?;

    tracing::debug!("Updating character {}: {:?}", id, payload);

    let param = ReplaceCharacterParam::from_dto(id, payload)?;
    let character = CharacterService::new(&state.db, state.store_timeout)
        .replace(param)
        .await?;

    respond_with(state.missing_character, character)
}

/// Resolves the `{id}` path segment to a document key.
///
/// Segments that do not decode to UTF-8 never reach `ObjectId::parse` but are reported
/// the same way as any other malformed id.
fn parse_id(id: Result<Path<String>, PathRejection>) -> Result<ObjectId, CharacterError> {
    let Path(id) = id?;
    Ok(ObjectId::parse(&id)?)
}

/// Builds the `200 OK` response for a lookup result, applying the not-found policy.
fn respond_with(
    policy: MissingCharacterPolicy,
    character: Option<Character>,
) -> Result<Response, AppError> {
    match (character, policy) {
        (Some(character), _) => {
            Ok((StatusCode::OK, Json(Some(character.into_dto()))).into_response())
        }
        (None, MissingCharacterPolicy::Null) => {
            Ok((StatusCode::OK, Json(None::<CharacterDto>)).into_response())
        }
        (None, MissingCharacterPolicy::NotFound) => {
            Err(AppError::NotFound("character not found".to_string()))
        }
    }
}
