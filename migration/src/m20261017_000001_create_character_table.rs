use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(string(Character::Id))
                    .col(string(Character::Name))
                    .col(json_null(Character::Attributes))
                    .col(integer(Character::Version))
                    .primary_key(Index::create().col(Character::Id))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    #[sea_orm(iden = "_id")]
    Id,
    Name,
    Attributes,
    #[sea_orm(iden = "__v")]
    Version,
}
