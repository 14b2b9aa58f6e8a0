use async_trait::async_trait;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    error::AppError,
    model::admin::{AdminRow, FormField, FormValues},
    service::admin::{persist, primary_key, AdminResource, ResourceModel},
};

/// User accounts. Password hashes are never listed or edited.
pub struct UsersResource;

#[async_trait]
impl AdminResource for UsersResource {
    type Entity = entity::prelude::Users;

    const SLUG: &'static str = "users";
    const TITLE: &'static str = "Пользователи";

    fn columns() -> Vec<&'static str> {
        vec!["Email", "Фамилия", "Имя", "Отчество", "Аватар"]
    }

    async fn rows(
        _db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr> {
        Ok(models
            .into_iter()
            .map(|user| AdminRow {
                id: user.id,
                cells: vec![
                    user.email.unwrap_or_default(),
                    user.last_name,
                    user.first_name,
                    user.middle_name.unwrap_or_default(),
                    user.avatar_uri.unwrap_or_default(),
                ],
            })
            .collect())
    }

    async fn fields(_db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr> {
        Ok(vec![
            FormField::text("email", "Email").optional(),
            FormField::text("last_name", "Фамилия"),
            FormField::text("first_name", "Имя"),
            FormField::text("middle_name", "Отчество").optional(),
            FormField::text("avatar_uri", "Аватар").optional(),
        ])
    }

    fn values(model: &ResourceModel<Self>) -> FormValues {
        FormValues::new()
            .set_opt("email", model.email.as_ref())
            .set("last_name", &model.last_name)
            .set("first_name", &model.first_name)
            .set_opt("middle_name", model.middle_name.as_ref())
            .set_opt("avatar_uri", model.avatar_uri.as_ref())
    }

    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError> {
        let model = entity::users::ActiveModel {
            id: primary_key(id),
            email: ActiveValue::Set(values.optional_text("email")),
            password_hash: ActiveValue::NotSet,
            first_name: ActiveValue::Set(values.text("first_name", "Имя")?),
            middle_name: ActiveValue::Set(values.optional_text("middle_name")),
            last_name: ActiveValue::Set(values.text("last_name", "Фамилия")?),
            avatar_uri: ActiveValue::Set(values.optional_text("avatar_uri")),
        };

        persist(db, id, model).await
    }
}
