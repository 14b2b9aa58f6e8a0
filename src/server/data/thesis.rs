//! Thesis data repository.
//!
//! Provides the `ThesisRepository` for the public directory queries and for the lifecycle
//! of uploaded theses: insertion as temporary, listing for moderation, publication and
//! deletion.

use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{thesis::ThesisQueryParam, upload::CreateTemporaryThesisParam};

pub struct ThesisRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThesisRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the distinct publication years of published theses, newest first.
    pub async fn get_publish_years(&self) -> Result<Vec<i32>, DbErr> {
        let mut years: Vec<i32> = entity::prelude::Thesis::find()
            .select_only()
            .column(entity::thesis::Column::PublishYear)
            .filter(entity::thesis::Column::Temporary.eq(false))
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;

        years.sort_unstable_by(|a, b| b.cmp(a));

        Ok(years)
    }

    /// Gets the distinct course ids referenced by any thesis.
    pub async fn get_course_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Thesis::find()
            .select_only()
            .column(entity::thesis::Column::CourseId)
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the distinct supervisor ids referenced by any thesis.
    pub async fn get_supervisor_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Thesis::find()
            .select_only()
            .column(entity::thesis::Column::SupervisorId)
            .distinct()
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Checks whether any thesis, temporary or not, belongs to the course.
    pub async fn course_in_use(&self, course_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::CourseId.eq(course_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether any thesis, temporary or not, is supervised by the staff member.
    pub async fn supervisor_in_use(&self, supervisor_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::SupervisorId.eq(supervisor_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets one page of published theses matching the query.
    ///
    /// # Arguments
    /// - `param` - Year range and optional course, supervisor and worktype constraints
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of theses per page
    ///
    /// # Returns
    /// - `Ok((theses, total))` - Theses of the page, newest first, and the total match count.
    ///   A page past the end yields no theses.
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(
        &self,
        param: ThesisQueryParam,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::thesis::Model>, u64), DbErr> {
        let mut query = entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::Temporary.eq(false))
            .filter(entity::thesis::Column::PublishYear.gte(param.start_year))
            .filter(entity::thesis::Column::PublishYear.lte(param.end_year));

        if let Some(course_id) = param.course_id {
            query = query.filter(entity::thesis::Column::CourseId.eq(course_id));
        }
        if let Some(supervisor_id) = param.supervisor_id {
            query = query.filter(entity::thesis::Column::SupervisorId.eq(supervisor_id));
        }
        if let Some(type_id) = param.type_id {
            query = query.filter(entity::thesis::Column::TypeId.eq(type_id));
        }

        let paginator = query
            .order_by_desc(entity::thesis::Column::PublishYear)
            .order_by_asc(entity::thesis::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let theses = paginator.fetch_page(page).await?;

        Ok((theses, total))
    }

    /// Gets up to `limit` random recommended published theses.
    pub async fn get_random_recommended(
        &self,
        limit: u64,
    ) -> Result<Vec<entity::thesis::Model>, DbErr> {
        entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::Recomended.eq(true))
            .filter(entity::thesis::Column::Temporary.eq(false))
            .order_by(Expr::cust("RANDOM()"), Order::Asc)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Checks whether a thesis already stores a text under this file name.
    pub async fn exists_by_text_uri(&self, text_uri: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::TextUri.eq(text_uri))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts an uploaded thesis awaiting moderation.
    pub async fn create_temporary(
        &self,
        param: CreateTemporaryThesisParam,
    ) -> Result<entity::thesis::Model, DbErr> {
        entity::thesis::ActiveModel {
            name_ru: ActiveValue::Set(param.name_ru),
            author: ActiveValue::Set(param.author),
            text_uri: ActiveValue::Set(Some(param.text_uri)),
            presentation_uri: ActiveValue::Set(param.presentation_uri),
            supervisor_review_uri: ActiveValue::Set(param.supervisor_review_uri),
            reviewer_review_uri: ActiveValue::Set(param.reviewer_review_uri),
            source_uri: ActiveValue::Set(param.source_uri),
            publish_year: ActiveValue::Set(param.publish_year),
            type_id: ActiveValue::Set(param.type_id),
            course_id: ActiveValue::Set(param.course_id),
            supervisor_id: ActiveValue::Set(param.supervisor_id),
            reviewer_id: ActiveValue::Set(param.reviewer_id),
            recomended: ActiveValue::Set(false),
            temporary: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets every thesis awaiting moderation, oldest upload first.
    pub async fn get_temporary(&self) -> Result<Vec<entity::thesis::Model>, DbErr> {
        entity::prelude::Thesis::find()
            .filter(entity::thesis::Column::Temporary.eq(true))
            .order_by_asc(entity::thesis::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a thesis awaiting moderation. Published theses are not returned.
    pub async fn find_temporary(&self, id: i32) -> Result<Option<entity::thesis::Model>, DbErr> {
        entity::prelude::Thesis::find_by_id(id)
            .filter(entity::thesis::Column::Temporary.eq(true))
            .one(self.db)
            .await
    }

    /// Clears the temporary flag, publishing the thesis in the directory.
    pub async fn mark_published(
        &self,
        thesis: entity::thesis::Model,
    ) -> Result<entity::thesis::Model, DbErr> {
        let mut active = thesis.into_active_model();
        active.temporary = ActiveValue::Set(false);
        active.update(self.db).await
    }

    /// Deletes a thesis by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The thesis existed and was deleted
    /// - `Ok(false)` - No thesis with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Thesis::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
