use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, server::state::AppState};

/// Terminal response for any request no route or asset matched.
///
/// # Returns
/// - `404 Not Found` - `{"error": "unknown endpoint"}`
pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "unknown endpoint".to_string(),
        }),
    )
}

/// Router fallback.
///
/// Hands browser navigation to the static front end when one is deployed and answers
/// everything else with `unknown_endpoint`.
pub async fn fallback(State(state): State<AppState>, request: Request) -> Response {
    match state.assets {
        Some(ref assets) if assets.accepts(&request) => assets.serve(request).await,
        _ => {
            tracing::debug!("Unknown endpoint: {} {}", request.method(), request.uri());
            unknown_endpoint().await.into_response()
        }
    }
}
