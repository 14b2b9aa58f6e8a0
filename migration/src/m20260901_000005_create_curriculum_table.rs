use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000004_create_courses_table::Courses;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Curriculum::Table)
                    .if_not_exists()
                    .col(pk_auto(Curriculum::Id))
                    .col(integer(Curriculum::CourseId))
                    .col(integer(Curriculum::StudyYear))
                    .col(string(Curriculum::Type))
                    .col(string(Curriculum::Discipline))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_curriculum_course_id")
                            .from(Curriculum::Table, Curriculum::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Curriculum::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Curriculum {
    Table,
    Id,
    CourseId,
    StudyYear,
    Type,
    Discipline,
}
