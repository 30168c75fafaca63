use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Public representation of a character.
///
/// The storage key is exposed as `id`; the internal version counter never appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: String,
    pub name: String,
    pub attributes: BTreeMap<String, String>,
}

/// Body of `POST /api/characters`. Only `name` is read; other fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
}

/// Body of `PUT /api/characters/{id}`, a full replacement of the document.
///
/// Missing or `null` attributes replace the stored map with an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    #[serde(default)]
    pub attributes: Option<BTreeMap<String, String>>,
}

/// Accepts a string field given as any JSON scalar, so `12345` is stored as `"12345"`.
///
/// `null` reads as absent. Arrays and objects are rejected.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(value) => Ok(Some(value)),
        Value::Number(value) => Ok(Some(value.to_string())),
        Value::Bool(value) => Ok(Some(value.to_string())),
        other => Err(de::Error::custom(format!(
            "invalid type: expected a string, found {}",
            if other.is_array() { "an array" } else { "an object" }
        ))),
    }
}
