use sea_orm::entity::prelude::*;

/// A stored character document.
///
/// The storage key keeps its document-store name `_id` and the version counter
/// is stored as `__v`; neither name ever reaches the public API.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "character")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "_id")]
    pub id: String,
    pub name: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub attributes: Option<Json>,
    #[sea_orm(column_name = "__v")]
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
