use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    data::users::UserRepository,
    error::AppError,
    model::{
        admin::{AdminRow, Choice, FormField, FormValues},
        staff::PersonName,
    },
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

/// Science degrees offered in the staff form. The empty choice means no degree.
pub const SCIENCE_DEGREES: [&str; 5] = ["", "д.ф.-м.н.", "д.т.н.", "к.ф.-м.н.", "к.т.н."];

fn degree_choices() -> Vec<Choice> {
    SCIENCE_DEGREES
        .into_iter()
        .map(|degree| Choice::new(degree, degree))
        .collect()
}

pub struct StaffResource;

#[async_trait]
impl AdminResource for StaffResource {
    type Entity = entity::prelude::Staff;

    const SLUG: &'static str = "staff";
    const TITLE: &'static str = "Сотрудники";

    fn columns() -> Vec<&'static str> {
        vec!["Сотрудник", "Должность", "Учёная степень", "Email", "Работает"]
    }

    async fn rows(
        db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        let names: HashMap<i32, String> = UserRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|user| (user.id, PersonName::from_entity(&user).full_name()))
            .collect();

        Ok(models
            .into_iter()
            .map(|staff| AdminRow {
                id: staff.id,
                cells: vec![
                    names.get(&staff.user_id).cloned().unwrap_or_default(),
                    staff.position,
                    staff.science_degree.unwrap_or_default(),
                    staff.official_email.unwrap_or_default(),
                    if staff.still_working { "да" } else { "нет" }.to_string(),
                ],
            })
            .collect())
    }

    async fn fields(db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        let users = UserRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|user| Choice::new(user.id, PersonName::from_entity(&user).full_name()))
            .collect();

        Ok(vec![
            FormField::select("user_id", "Пользователь", users),
            FormField::text("position", "Должность"),
            FormField::select("science_degree", "Учёная степень", degree_choices()).optional(),
            FormField::text("official_email", "Email").optional(),
            FormField::checkbox("still_working", "Работает"),
        ])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new()
            .set("user_id", model.user_id)
            .set("position", &model.position)
            .set_opt("science_degree", model.science_degree.as_ref())
            .set_opt("official_email", model.official_email.as_ref())
            .set_flag("still_working", model.still_working)
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let degree = values.choice("science_degree", "Учёная степень", &degree_choices())?;

        let model = entity::staff::ActiveModel {
            id: primary_key(id),
            user_id: ActiveValue::Set(values.integer("user_id", "Пользователь")?),
            position: ActiveValue::Set(values.text("position", "Должность")?),
            science_degree: ActiveValue::Set((!degree.is_empty()).then_some(degree)),
            official_email: ActiveValue::Set(values.optional_text("official_email")),
            still_working: ActiveValue::Set(values.checkbox("still_working")),
        };

        persist(db, id, model).await
    }
}
