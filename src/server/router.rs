use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::{
            character::{self, create_character, get_character, update_character},
            fallback::{fallback, unknown_endpoint},
        },
        middleware::logging::log_request,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Character API"),
    paths(
        character::create_character,
        character::get_character,
        character::update_character,
    ),
    components(schemas(CharacterDto, CreateCharacterDto, UpdateCharacterDto, ErrorDto)),
    tags(
        (name = "character", description = "Character resource")
    )
)]
pub struct ApiDoc;

/// Routes of the character API.
///
/// Known paths with an unsupported method fall back to `unknown_endpoint` rather than
/// 405, and every other unmatched request goes through `fallback`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/characters",
            post(create_character).fallback(unknown_endpoint),
        )
        .route(
            "/api/characters/{id}",
            get(get_character)
                .put(update_character)
                .fallback(unknown_endpoint),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .fallback(fallback)
}

/// Builds the complete application: routes, state, access logging and CORS.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
}
