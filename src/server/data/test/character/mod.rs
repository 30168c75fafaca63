use std::collections::BTreeMap;

use crate::server::{
    data::character::CharacterRepository,
    model::character::{CharacterName, CreateCharacterParam, ReplaceCharacterParam},
    util::object_id::ObjectId,
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;

fn name(value: &str) -> CharacterName {
    CharacterName::parse(Some(value.to_string())).unwrap()
}
