use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    error::AppError,
    model::admin::{AdminRow, FormField, FormValues},
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

pub struct WorktypeResource;

#[async_trait]
impl AdminResource for WorktypeResource {
    type Entity = entity::prelude::Worktype;

    const SLUG: &'static str = "worktype";
    const TITLE: &'static str = "Типы работ";

    fn columns() -> Vec<&'static str> {
        vec!["Тип"]
    }

    async fn rows(
        _db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        Ok(models
            .into_iter()
            .map(|worktype| AdminRow {
                id: worktype.id,
                cells: vec![worktype.kind],
            })
            .collect())
    }

    async fn fields(_db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        Ok(vec![FormField::text("kind", "Тип")])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new().set("kind", &model.kind)
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::worktype::ActiveModel {
            id: primary_key(id),
            kind: ActiveValue::Set(values.text("kind", "Тип")?),
        };

        persist(db, id, model).await
    }
}
