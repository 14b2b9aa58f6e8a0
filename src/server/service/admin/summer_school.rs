use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    error::AppError,
    model::admin::{AdminRow, FormField, FormValues},
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

/// Summer school projects. Long descriptions and link lists are edited in textareas.
pub struct SummerSchoolResource;

#[async_trait]
impl AdminResource for SummerSchoolResource {
    type Entity = entity::prelude::SummerSchool;

    const SLUG: &'static str = "summer_school";
    const TITLE: &'static str = "Летняя школа";

    fn columns() -> Vec<&'static str> {
        vec!["Год", "Проект", "Руководители"]
    }

    async fn rows(
        _db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        Ok(models
            .into_iter()
            .map(|project| AdminRow {
                id: project.id,
                cells: vec![
                    project.year.to_string(),
                    project.project_name,
                    project.advisors.unwrap_or_default(),
                ],
            })
            .collect())
    }

    async fn fields(_db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        Ok(vec![
            FormField::number("year", "Год"),
            FormField::text("project_name", "Проект"),
            FormField::textarea("description", "Описание"),
            FormField::textarea("tech", "Технологии").optional(),
            FormField::textarea("repo", "Репозитории").optional(),
            FormField::textarea("demos", "Демонстрации").optional(),
            FormField::textarea("advisors", "Руководители").optional(),
            FormField::textarea("requirements", "Требования").optional(),
        ])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new()
            .set("year", model.year)
            .set("project_name", &model.project_name)
            .set("description", &model.description)
            .set_opt("tech", model.tech.as_ref())
            .set_opt("repo", model.repo.as_ref())
            .set_opt("demos", model.demos.as_ref())
            .set_opt("advisors", model.advisors.as_ref())
            .set_opt("requirements", model.requirements.as_ref())
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::summer_school::ActiveModel {
            id: primary_key(id),
            year: ActiveValue::Set(values.integer("year", "Год")?),
            project_name: ActiveValue::Set(values.text("project_name", "Проект")?),
            description: ActiveValue::Set(values.multiline("description", "Описание")?),
            tech: ActiveValue::Set(values.optional_multiline("tech")),
            repo: ActiveValue::Set(values.optional_multiline("repo")),
            demos: ActiveValue::Set(values.optional_multiline("demos")),
            advisors: ActiveValue::Set(values.optional_multiline("advisors")),
            requirements: ActiveValue::Set(values.optional_multiline("requirements")),
        };

        persist(db, id, model).await
    }
}
