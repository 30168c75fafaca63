//! Character data repository for document store operations.
//!
//! This module provides the `CharacterRepository` for creating, finding and replacing
//! character documents. Identifiers are assigned here, at insert time, and every write
//! is committed before the repository returns.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    TransactionTrait,
};

use crate::server::{
    model::character::{Character, CreateCharacterParam, ReplaceCharacterParam},
    util::object_id::ObjectId,
};

/// Repository providing document operations for characters.
pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new CharacterRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CharacterRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new character document.
    ///
    /// Generates a fresh `ObjectId`, stores the validated name with no attributes and
    /// a version counter of 0.
    ///
    /// # Arguments
    /// - `param` - Create parameters containing a validated name
    ///
    /// # Returns
    /// - `Ok(Character)` - The stored character including its assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCharacterParam) -> Result<Character, DbErr> {
        let id = ObjectId::new();

        let entity = entity::character::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            name: ActiveValue::Set(param.name.into_inner()),
            attributes: ActiveValue::Set(None),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        tracing::debug!("Created character {} at {}", id, id.timestamp());

        Character::from_entity(entity)
    }

    /// Finds a character by its id.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - Document found
    /// - `Ok(None)` - No document has this id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Character>, DbErr> {
        entity::prelude::Character::find_by_id(id.to_string())
            .one(self.db)
            .await?
            .map(Character::from_entity)
            .transpose()
    }

    /// Replaces a character's name and attributes.
    ///
    /// The lookup and the write run inside one transaction so the replace is atomic with
    /// respect to other writers. The id and version counter are left untouched, which
    /// makes repeated replaces with the same parameters produce identical documents.
    ///
    /// # Returns
    /// - `Ok(Some(Character))` - The document after replacement
    /// - `Ok(None)` - No document has this id; nothing was written
    /// - `Err(DbErr)` - Database error during the transaction
    pub async fn replace_by_id(
        &self,
        param: ReplaceCharacterParam,
    ) -> Result<Option<Character>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Character::find_by_id(param.id.to_string())
            .one(&txn)
            .await?
        else {
            txn.rollback().await?;
            return Ok(None);
        };

        let attributes = if param.attributes.is_empty() {
            None
        } else {
            Some(serde_json::to_value(param.attributes).map_err(|e| DbErr::Json(e.to_string()))?)
        };

        let mut active_model = existing.into_active_model();
        active_model.name = ActiveValue::Set(param.name.into_inner());
        active_model.attributes = ActiveValue::Set(attributes);

        let entity = active_model.update(&txn).await?;

        txn.commit().await?;

        Character::from_entity(entity).map(Some)
    }
}
