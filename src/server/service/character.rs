//! Character service for business logic.
//!
//! This module provides the `CharacterService`, which runs character repository calls under
//! the per-request store budget and lifts store failures into `AppError`.

use std::{future::Future, time::Duration};

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParam, ReplaceCharacterParam},
    util::object_id::ObjectId,
};

/// Service providing business logic for character management.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    store_timeout: Duration,
}

impl<'a> CharacterService<'a> {
    /// Creates a new CharacterService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `store_timeout` - Upper bound for each individual store call
    pub fn new(db: &'a DatabaseConnection, store_timeout: Duration) -> Self {
        Self { db, store_timeout }
    }

    /// Creates a character.
    ///
    /// # Returns
    /// - `Ok(Character)` - The stored character with its assigned id
    /// - `Err(AppError::StoreTimeout)` - The store did not answer in time
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);
        within_budget(self.store_timeout, repo.create(param)).await
    }

    /// Looks up a character by id.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Character found
    /// - `Ok(None)` - No character has this id
    /// - `Err(AppError)` - Timeout or database error
    pub async fn get(&self, id: ObjectId) -> Result<Option<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);
        within_budget(self.store_timeout, repo.find_by_id(&id)).await
    }

    /// Replaces a character's document.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The character after replacement
    /// - `Ok(None)` - No character has this id
    /// - `Err(AppError)` - Timeout or database error
    pub async fn replace(
        &self,
        param: ReplaceCharacterParam,
    ) -> Result<Option<Character>, AppError> {
        tracing::debug!("Replacing character {} with name {}", param.id, param.name.as_str());

        let repo = CharacterRepository::new(self.db);
        within_budget(self.store_timeout, repo.replace_by_id(param)).await
    }
}

/// Awaits a store call, failing with `AppError::StoreTimeout` once `budget` elapses.
///
/// A timed out call is dropped, which cancels it; an in-flight transaction is rolled
/// back when its handle is dropped.
pub async fn within_budget<T, F>(budget: Duration, call: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, DbErr>>,
{
    match tokio::time::timeout(budget, call).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AppError::StoreTimeout(budget)),
    }
}
