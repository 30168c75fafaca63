use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::util::object_id::ParseObjectIdError};

/// Body returned for any id that cannot be interpreted as a store key.
pub const MALFORMED_ID_MESSAGE: &str = "Non-existing or malformatted id";

/// Failures raised while validating or addressing a character document.
#[derive(Error, Debug, PartialEq)]
pub enum CharacterError {
    /// The supplied id is not a valid document key.
    ///
    /// Results in a 400 Bad Request with a fixed message that does not echo the input.
    #[error(transparent)]
    MalformedId(#[from] ParseObjectIdError),

    /// The `{id}` path segment could not be extracted, e.g. it is not valid UTF-8
    /// once percent-decoded.
    ///
    /// Reported exactly like `MalformedId`.
    #[error("Unreadable id: {0}")]
    UnreadableId(String),

    /// The document violates a declared field constraint.
    ///
    /// Results in a 400 Bad Request carrying the full validation message.
    #[error("Character validation failed: {field}: {message}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Constraint-specific description
        message: String,
    },
}

impl From<PathRejection> for CharacterError {
    fn from(rejection: PathRejection) -> Self {
        Self::UnreadableId(rejection.body_text())
    }
}

/// Converts character errors into HTTP responses.
///
/// - `MalformedId`, `UnreadableId` → 400 Bad Request with "Non-existing or malformatted id"
/// - `Validation` → 400 Bad Request with the validation message
impl IntoResponse for CharacterError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let error = match self {
            Self::MalformedId(_) | Self::UnreadableId(_) => MALFORMED_ID_MESSAGE.to_string(),
            err @ Self::Validation { .. } => err.to_string(),
        };

        (StatusCode::BAD_REQUEST, Json(ErrorDto { error })).into_response()
    }
}
