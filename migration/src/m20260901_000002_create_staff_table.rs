use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::Id))
                    .col(integer(Staff::UserId))
                    .col(string(Staff::Position))
                    .col(string_null(Staff::ScienceDegree))
                    .col(string_null(Staff::OfficialEmail))
                    .col(boolean(Staff::StillWorking).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_user_id")
                            .from(Staff::Table, Staff::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    Table,
    Id,
    UserId,
    Position,
    ScienceDegree,
    OfficialEmail,
    StillWorking,
}
