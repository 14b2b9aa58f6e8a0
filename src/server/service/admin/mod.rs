//! Admin backend for the department's records.
//!
//! Each table is exposed as an [`AdminResource`]: a slug and title, list columns and a
//! form description, plus the conversion between form values and the entity. The
//! generic [`AdminService`] implements listing, editing and deletion once for every
//! resource on top of [`AdminRepository`].

pub mod courses;
pub mod curriculum;
pub mod staff;
pub mod summer_school;
pub mod thesis;
pub mod users;
pub mod worktype;

use std::marker::PhantomData;

use async_trait::async_trait;
use dioxus_logger::tracing;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, SqlErr,
};

use crate::server::{
    data::admin::AdminRepository,
    error::{form::FormError, AppError},
    model::{
        admin::{AdminForm, AdminLink, AdminListPage, AdminRow, FormField, FormValues, ADMIN_PER_PAGE},
        pagination::Pagination,
    },
};

pub use self::{
    courses::CoursesResource, curriculum::CurriculumResource, staff::StaffResource,
    summer_school::SummerSchoolResource, thesis::ThesisResource, users::UsersResource,
    worktype::WorktypeResource,
};

/// Entity model of an admin resource.
pub type ResourceModel<R> = <<R as AdminResource>::Entity as EntityTrait>::Model;

/// A table editable through the admin backend.
#[async_trait]
pub trait AdminResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model: Sync, PrimaryKey: PrimaryKeyTrait<ValueType = i32>>;

    /// URL segment under `/admin/`.
    const SLUG: &'static str;
    const TITLE: &'static str;

    /// Headers of the list table.
    fn columns() -> Vec<&'static str>;

    /// List table rows for a page of records.
    async fn rows(
        db: &DatabaseConnection,
        models: Vec<ResourceModel<Self>>,
    ) -> Result<Vec<AdminRow>, DbErr>;

    /// Form inputs, with select choices loaded from the database.
    async fn fields(db: &DatabaseConnection) -> Result<Vec<FormField>, DbErr>;

    /// Form values of an existing record.
    fn values(model: &ResourceModel<Self>) -> FormValues;

    /// Inserts a record (`id` is `None`) or updates an existing one from form values.
    async fn save(
        db: &DatabaseConnection,
        id: Option<i32>,
        values: &FormValues,
    ) -> Result<(), AppError>;

    fn link() -> AdminLink {
        AdminLink {
            slug: Self::SLUG,
            title: Self::TITLE,
        }
    }
}

/// Every admin resource in menu order.
pub fn resources() -> Vec<AdminLink> {
    vec![
        UsersResource::link(),
        StaffResource::link(),
        ThesisResource::link(),
        SummerSchoolResource::link(),
        CoursesResource::link(),
        CurriculumResource::link(),
        WorktypeResource::link(),
    ]
}

pub struct AdminService<'a, R> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: AdminResource> AdminService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Gets one page of the resource list.
    ///
    /// # Arguments
    /// - `page` - Page number starting at 1; lower values are treated as 1
    pub async fn list(&self, page: u64) -> Result<AdminListPage, AppError> {
        let page = page.max(1);
        let (models, total) = AdminRepository::<R::Entity>::new(self.db)
            .get_paginated(page - 1, ADMIN_PER_PAGE)
            .await?;

        Ok(AdminListPage {
            resource: R::link(),
            columns: R::columns(),
            rows: R::rows(self.db, models).await?,
            pagination: Pagination::new(page, ADMIN_PER_PAGE, total),
        })
    }

    /// Builds an empty form for a new record.
    pub async fn new_form(&self) -> Result<AdminForm, AppError> {
        self.form(None, FormValues::new(), None).await
    }

    /// Builds the edit form of a record.
    ///
    /// # Returns
    /// - `Ok(Some(AdminForm))` - Form filled with the record's values
    /// - `Ok(None)` - No record with that id
    pub async fn edit_form(&self, id: i32) -> Result<Option<AdminForm>, AppError> {
        let Some(model) = AdminRepository::<R::Entity>::new(self.db)
            .find_by_id(id)
            .await?
        else {
            return Ok(None);
        };

        self.form(Some(id), R::values(&model), None)
            .await
            .map(Some)
    }

    /// Builds a form showing rejected input together with the rejection.
    pub async fn invalid_form(
        &self,
        id: Option<i32>,
        values: FormValues,
        error: &FormError,
    ) -> Result<AdminForm, AppError> {
        self.form(id, values, Some(error.to_string())).await
    }

    pub async fn create(&self, values: &FormValues) -> Result<(), AppError> {
        R::save(self.db, None, values).await?;
        tracing::info!("Created {} record", R::SLUG);

        Ok(())
    }

    /// Updates an existing record.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - No record with that id
    /// - `Err(AppError::FormErr)` - Invalid or conflicting form input
    pub async fn update(&self, id: i32, values: &FormValues) -> Result<(), AppError> {
        if AdminRepository::<R::Entity>::new(self.db)
            .find_by_id(id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("No {} record {}", R::SLUG, id)));
        }

        R::save(self.db, Some(id), values).await?;
        tracing::info!("Updated {} record {}", R::SLUG, id);

        Ok(())
    }

    /// Deletes a record, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = AdminRepository::<R::Entity>::new(self.db)
            .delete(id)
            .await
            .map_err(constraint_error)?;
        if deleted {
            tracing::info!("Deleted {} record {}", R::SLUG, id);
        }

        Ok(deleted)
    }

    async fn form(
        &self,
        id: Option<i32>,
        values: FormValues,
        error: Option<String>,
    ) -> Result<AdminForm, AppError> {
        Ok(AdminForm {
            resource: R::link(),
            id,
            fields: R::fields(self.db).await?,
            values,
            error,
        })
    }
}

/// Primary key value for an insert (`None`) or an update.
pub(crate) fn primary_key(id: Option<i32>) -> ActiveValue<i32> {
    match id {
        Some(id) => ActiveValue::Unchanged(id),
        None => ActiveValue::NotSet,
    }
}

/// Inserts or updates an active model built from a form.
pub(crate) async fn persist<A>(
    db: &DatabaseConnection,
    id: Option<i32>,
    model: A,
) -> Result<(), AppError>
where
    A: ActiveModelTrait + ActiveModelBehavior + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    let result = match id {
        Some(_) => model.update(db).await.map(|_| ()),
        None => model.insert(db).await.map(|_| ()),
    };

    result.map_err(constraint_error)
}

/// Reports constraint violations as form errors, other database errors as they are.
fn constraint_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            FormError::new("record", format!("Already exists: {}", message)).into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
            FormError::new("record", format!("Referenced record is missing or in use: {}", message))
                .into()
        }
        _ => err.into(),
    }
}
