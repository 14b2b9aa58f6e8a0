use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Worktype::Table)
                    .if_not_exists()
                    .col(pk_auto(Worktype::Id))
                    .col(string_uniq(Worktype::Type))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Worktype::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Worktype {
    Table,
    Id,
    Type,
}
