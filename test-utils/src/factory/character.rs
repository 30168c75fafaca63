//! Character factory for creating test character documents.

use std::collections::BTreeMap;

use crate::factory::helpers::{next_id, next_object_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::character::CharacterFactory;
///
/// let character = CharacterFactory::new(&db)
///     .name("Gandalf")
///     .attribute("class", "wizard")
///     .build()
///     .await?;
/// ```
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    attributes: BTreeMap<String, String>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - id: unique 24 character hex key
    /// - name: `"Character {n}"` where n is auto-incremented
    /// - attributes: none
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_object_id(),
            name: format!("Character {}", next_id()),
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the storage key of the document.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the character name. No length validation is applied.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a single attribute entry.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Builds and inserts the character entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::character::Model)` - Created character entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        let attributes = if self.attributes.is_empty() {
            None
        } else {
            Some(
                serde_json::to_value(self.attributes)
                    .map_err(|e| DbErr::Custom(e.to_string()))?,
            )
        };

        entity::character::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            attributes: ActiveValue::Set(attributes),
            version: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values.
///
/// Shorthand for `CharacterFactory::new(db).build().await`.
pub async fn create_character(db: &DatabaseConnection) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db).build().await
}
