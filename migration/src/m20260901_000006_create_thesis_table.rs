use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000002_create_staff_table::Staff, m20260901_000003_create_worktype_table::Worktype,
    m20260901_000004_create_courses_table::Courses,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Thesis::Table)
                    .if_not_exists()
                    .col(pk_auto(Thesis::Id))
                    .col(string(Thesis::NameRu))
                    .col(string_null(Thesis::NameEn))
                    .col(text_null(Thesis::Description))
                    .col(string(Thesis::Author))
                    .col(string_null(Thesis::TextUri).unique_key())
                    .col(string_null(Thesis::PresentationUri))
                    .col(string_null(Thesis::SupervisorReviewUri))
                    .col(string_null(Thesis::ReviewerReviewUri))
                    .col(string_null(Thesis::SourceUri))
                    .col(integer(Thesis::PublishYear))
                    .col(integer(Thesis::TypeId))
                    .col(integer(Thesis::CourseId))
                    .col(integer(Thesis::SupervisorId))
                    .col(integer_null(Thesis::ReviewerId))
                    .col(boolean(Thesis::Recomended).default(false))
                    .col(boolean(Thesis::Temporary).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thesis_type_id")
                            .from(Thesis::Table, Thesis::TypeId)
                            .to(Worktype::Table, Worktype::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thesis_course_id")
                            .from(Thesis::Table, Thesis::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thesis_supervisor_id")
                            .from(Thesis::Table, Thesis::SupervisorId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_thesis_reviewer_id")
                            .from(Thesis::Table, Thesis::ReviewerId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Thesis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Thesis {
    Table,
    Id,
    NameRu,
    NameEn,
    Description,
    Author,
    TextUri,
    PresentationUri,
    SupervisorReviewUri,
    ReviewerReviewUri,
    SourceUri,
    PublishYear,
    TypeId,
    CourseId,
    SupervisorId,
    ReviewerId,
    Recomended,
    Temporary,
}
