use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::{courses::CourseRepository, staff::StaffRepository, worktype::WorktypeRepository},
    error::AppError,
    model::{
        admin::{AdminRow, Choice, FormField, FormValues},
        staff::PersonName,
    },
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

pub struct ThesisResource;

#[async_trait]
impl AdminResource for ThesisResource {
    type Entity = entity::prelude::Thesis;

    const SLUG: &'static str = "thesis";
    const TITLE: &'static str = "Работы";

    fn columns() -> Vec<&'static str> {
        vec!["Название", "Автор", "Год", "Тип", "Рекомендована", "На модерации"]
    }

    async fn rows(
        db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        let worktypes: HashMap<i32, String> = WorktypeRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|worktype| (worktype.id, worktype.kind))
            .collect();
        let flag = |value: bool| if value { "да" } else { "нет" }.to_string();

        Ok(models
            .into_iter()
            .map(|thesis| AdminRow {
                id: thesis.id,
                cells: vec![
                    thesis.name_ru,
                    thesis.author,
                    thesis.publish_year.to_string(),
                    worktypes.get(&thesis.type_id).cloned().unwrap_or_default(),
                    flag(thesis.recomended),
                    flag(thesis.temporary),
                ],
            })
            .collect())
    }

    async fn fields(db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        let worktypes = WorktypeRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|worktype| Choice::new(worktype.id, worktype.kind))
            .collect();
        let courses = CourseRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|course| Choice::new(course.id, course.name))
            .collect();
        let staff: Vec<Choice> = StaffRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|(staff, user)| Choice::new(staff.id, PersonName::from_entity(&user).full_name()))
            .collect();
        let mut reviewers = vec![Choice::new("", "")];
        reviewers.extend(staff.iter().cloned());

        Ok(vec![
            FormField::text("name_ru", "Название"),
            FormField::text("name_en", "Название (англ.)").optional(),
            FormField::textarea("description", "Описание").optional(),
            FormField::text("author", "Автор"),
            FormField::number("publish_year", "Год"),
            FormField::select("type_id", "Тип", worktypes),
            FormField::select("course_id", "Направление", courses),
            FormField::select("supervisor_id", "Научный руководитель", staff),
            FormField::select("reviewer_id", "Рецензент", reviewers).optional(),
            FormField::text("text_uri", "Текст").optional(),
            FormField::text("presentation_uri", "Презентация").optional(),
            FormField::text("supervisor_review_uri", "Отзыв руководителя").optional(),
            FormField::text("reviewer_review_uri", "Рецензия").optional(),
            FormField::text("source_uri", "Исходный код").optional(),
            FormField::checkbox("recomended", "Рекомендована"),
            FormField::checkbox("temporary", "На модерации"),
        ])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new()
            .set("name_ru", &model.name_ru)
            .set_opt("name_en", model.name_en.as_ref())
            .set_opt("description", model.description.as_ref())
            .set("author", &model.author)
            .set("publish_year", model.publish_year)
            .set("type_id", model.type_id)
            .set("course_id", model.course_id)
            .set("supervisor_id", model.supervisor_id)
            .set_opt("reviewer_id", model.reviewer_id)
            .set_opt("text_uri", model.text_uri.as_ref())
            .set_opt("presentation_uri", model.presentation_uri.as_ref())
            .set_opt("supervisor_review_uri", model.supervisor_review_uri.as_ref())
            .set_opt("reviewer_review_uri", model.reviewer_review_uri.as_ref())
            .set_opt("source_uri", model.source_uri.as_ref())
            .set_flag("recomended", model.recomended)
            .set_flag("temporary", model.temporary)
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::thesis::ActiveModel {
            id: primary_key(id),
            name_ru: ActiveValue::Set(values.text("name_ru", "Название")?),
            name_en: ActiveValue::Set(values.optional_text("name_en")),
            description: ActiveValue::Set(values.optional_multiline("description")),
            author: ActiveValue::Set(values.text("author", "Автор")?),
            text_uri: ActiveValue::Set(values.optional_text("text_uri")),
            presentation_uri: ActiveValue::Set(values.optional_text("presentation_uri")),
            supervisor_review_uri: ActiveValue::Set(values.optional_text("supervisor_review_uri")),
            reviewer_review_uri: ActiveValue::Set(values.optional_text("reviewer_review_uri")),
            source_uri: ActiveValue::Set(values.optional_text("source_uri")),
            publish_year: ActiveValue::Set(values.integer("publish_year", "Год")?),
            type_id: ActiveValue::Set(values.integer("type_id", "Тип")?),
            course_id: ActiveValue::Set(values.integer("course_id", "Направление")?),
            supervisor_id: ActiveValue::Set(
                values.integer("supervisor_id", "Научный руководитель")?,
            ),
            reviewer_id: ActiveValue::Set(values.optional_integer("reviewer_id", "Рецензент")?),
            recomended: ActiveValue::Set(values.checkbox("recomended")),
            temporary: ActiveValue::Set(values.checkbox("temporary")),
        };

        persist(db, id, model).await
    }
}
