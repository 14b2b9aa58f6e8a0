use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::courses::CourseRepository,
    error::AppError,
    model::admin::{AdminRow, Choice, FormField, FormValues},
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

pub struct CurriculumResource;

#[async_trait]
impl AdminResource for CurriculumResource {
    type Entity = entity::prelude::Curriculum;

    const SLUG: &'static str = "curriculum";
    const TITLE: &'static str = "Учебные планы";

    fn columns() -> Vec<&'static str> {
        vec!["Направление", "Курс", "Блок", "Дисциплина"]
    }

    async fn rows(
        db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        let courses: HashMap<i32, String> = CourseRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|course| (course.id, course.name))
            .collect();

        Ok(models
            .into_iter()
            .map(|entry| AdminRow {
                id: entry.id,
                cells: vec![
                    courses.get(&entry.course_id).cloned().unwrap_or_default(),
                    entry.study_year.to_string(),
                    entry.kind,
                    entry.discipline,
                ],
            })
            .collect())
    }

    async fn fields(db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        let courses = CourseRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|course| Choice::new(course.id, course.name))
            .collect();

        Ok(vec![
            FormField::select("course_id", "Направление", courses),
            FormField::number("study_year", "Курс"),
            FormField::text("kind", "Блок"),
            FormField::text("discipline", "Дисциплина"),
        ])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new()
            .set("course_id", model.course_id)
            .set("study_year", model.study_year)
            .set("kind", &model.kind)
            .set("discipline", &model.discipline)
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::curriculum::ActiveModel {
            id: primary_key(id),
            course_id: ActiveValue::Set(values.integer("course_id", "Направление")?),
            study_year: ActiveValue::Set(values.integer("study_year", "Курс")?),
            kind: ActiveValue::Set(values.text("kind", "Блок")?),
            discipline: ActiveValue::Set(values.text("discipline", "Дисциплина")?),
        };

        persist(db, id, model).await
    }
}
