//! Domain and parameter models for character operations.
//!
//! This module holds the character schema rules. A `CharacterName` can only be
//! obtained through validation, so every create or replace parameter that reaches
//! the data layer already satisfies the declared field constraints.

use std::collections::BTreeMap;

use sea_orm::DbErr;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{error::character::CharacterError, util::object_id::ObjectId},
};

/// Minimum number of characters (Unicode scalar values) in a character name.
pub const NAME_MIN_LENGTH: usize = 3;

/// A character name that satisfies the schema: present and at least
/// `NAME_MIN_LENGTH` characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterName(String);

impl CharacterName {
    /// Validates a possibly absent name.
    ///
    /// # Returns
    /// - `Ok(CharacterName)` - Name is present and long enough
    /// - `Err(CharacterError::Validation)` - Name is missing or too short
    pub fn parse(name: Option<String>) -> Result<Self, CharacterError> {
        let Some(name) = name else {
            return Err(CharacterError::Validation {
                field: "name",
                message: "Path `name` is required.".to_string(),
            });
        };

        if name.chars().count() < NAME_MIN_LENGTH {
            return Err(CharacterError::Validation {
                field: "name",
                message: format!(
                    "Path `name` (`{}`) is shorter than the minimum allowed length ({}).",
                    name, NAME_MIN_LENGTH
                ),
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A character as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Storage key, rendered as 24 hexadecimal characters.
    pub id: String,
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

impl Character {
    /// Converts the character to the public DTO, exposing the storage key as `id`.
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            attributes: self.attributes,
        }
    }

    /// Converts an entity model to a character.
    ///
    /// This conversion happens at the data layer boundary so entity models never
    /// leak into service or controller layers. The version counter is dropped here.
    ///
    /// # Returns
    /// - `Ok(Character)` - Converted character (absent attributes become an empty map)
    /// - `Err(DbErr::Json)` - Stored attributes are not a string-to-string object
    pub fn from_entity(entity: entity::character::Model) -> Result<Self, DbErr> {
        let attributes = match entity.attributes {
            Some(json) => {
                serde_json::from_value(json).map_err(|e| DbErr::Json(e.to_string()))?
            }
            None => BTreeMap::new(),
        };

        Ok(Self {
            id: entity.id,
            name: entity.name,
            attributes,
        })
    }
}

/// Parameters for creating a new character.
#[derive(Debug, Clone)]
pub struct CreateCharacterParam {
    pub name: CharacterName,
}

impl CreateCharacterParam {
    /// Builds create parameters from a request body. Only the name is taken.
    pub fn from_dto(dto: CreateCharacterDto) -> Result<Self, CharacterError> {
        Ok(Self {
            name: CharacterName::parse(dto.name)?,
        })
    }
}

/// Parameters for replacing an existing character document.
#[derive(Debug, Clone)]
pub struct ReplaceCharacterParam {
    pub id: ObjectId,
    pub name: CharacterName,
    pub attributes: BTreeMap<String, String>,
}

impl ReplaceCharacterParam {
    /// Builds replace parameters from a parsed id and a full replacement body.
    pub fn from_dto(id: ObjectId, dto: UpdateCharacterDto) -> Result<Self, CharacterError> {
        Ok(Self {
            id,
            name: CharacterName::parse(dto.name)?,
            attributes: dto.attributes.unwrap_or_default(),
        })
    }
}
