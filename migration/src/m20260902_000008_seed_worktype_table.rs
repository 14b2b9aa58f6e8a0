use sea_orm_migration::prelude::*;

use super::m20260901_000003_create_worktype_table::Worktype;

/// Work types referenced by id from the upload endpoint and the thesis filter.
///
/// Id 1 is the catch-all used by the filter to mean "any type".
const WORKTYPES: &[(i32, &str)] = &[
    (1, "Все"),
    (2, "Отчёт по учебной практике"),
    (3, "Бакалаврская ВКР"),
    (4, "Магистерская ВКР"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Worktype::Table)
            .columns([Worktype::Id, Worktype::Type]);

        for (id, kind) in WORKTYPES {
            insert
                .values([(*id).into(), (*kind).into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let ids: Vec<i32> = WORKTYPES.iter().map(|(id, _)| *id).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Worktype::Table)
                    .and_where(Expr::col(Worktype::Id).is_in(ids))
                    .to_owned(),
            )
            .await
    }
}
