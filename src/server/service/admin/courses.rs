use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    error::AppError,
    model::admin::{AdminRow, FormField, FormValues},
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

pub struct CoursesResource;

#[async_trait]
impl AdminResource for CoursesResource {
    type Entity = entity::prelude::Courses;

    const SLUG: &'static str = "courses";
    const TITLE: &'static str = "Направления";

    fn columns() -> Vec<&'static str> {
        vec!["Название"]
    }

    async fn rows(
        _db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        Ok(models
            .into_iter()
            .map(|course| AdminRow {
                id: course.id,
                cells: vec![course.name],
            })
            .collect())
    }

    async fn fields(_db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        Ok(vec![FormField::text("name", "Название")])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new().set("name", &model.name)
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::courses::ActiveModel {
            id: primary_key(id),
            name: ActiveValue::Set(values.text("name", "Название")?),
        };

        persist(db, id, model).await
    }
}
