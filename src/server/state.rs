//! Application state shared across all request handlers.
//!
//! `AppState` is built once at startup and cloned for each request through Axum's state
//! extraction. It carries the store handle explicitly instead of relying on a process-wide
//! connection, together with the per-request policies handlers need.

use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{assets::StaticAssets, config::MissingCharacterPolicy};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool whose clones share
/// connections, and the rest are small values.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for the character document store.
    pub db: DatabaseConnection,

    /// Upper bound for each store call made while handling a request.
    pub store_timeout: Duration,

    /// Response policy for well-formed ids that match no document.
    pub missing_character: MissingCharacterPolicy,

    /// Built front end served for unmatched browser navigation, if present.
    pub assets: Option<StaticAssets>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `store_timeout` - Per-call store budget
    /// - `missing_character` - Not-found response policy
    /// - `assets` - Static front end, when one is deployed
    pub fn new(
        db: DatabaseConnection,
        store_timeout: Duration,
        missing_character: MissingCharacterPolicy,
        assets: Option<StaticAssets>,
    ) -> Self {
        Self {
            db,
            store_timeout,
            missing_character,
            assets,
        }
    }
}
