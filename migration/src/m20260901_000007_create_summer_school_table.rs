use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SummerSchool::Table)
                    .if_not_exists()
                    .col(pk_auto(SummerSchool::Id))
                    .col(integer(SummerSchool::Year))
                    .col(string(SummerSchool::ProjectName))
                    .col(text(SummerSchool::Description))
                    .col(text_null(SummerSchool::Tech))
                    .col(text_null(SummerSchool::Repo))
                    .col(text_null(SummerSchool::Demos))
                    .col(text_null(SummerSchool::Advisors))
                    .col(text_null(SummerSchool::Requirements))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SummerSchool::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SummerSchool {
    Table,
    Id,
    Year,
    ProjectName,
    Description,
    Tech,
    Repo,
    Demos,
    Advisors,
    Requirements,
}
