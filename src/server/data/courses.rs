use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every course ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::courses::Model>, DbErr> {
        entity::prelude::Courses::find()
            .order_by_asc(entity::courses::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the courses with the provided ids. Unknown ids are skipped.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::courses::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Courses::find()
            .filter(entity::courses::Column::Id.is_in(ids))
            .order_by_asc(entity::courses::Column::Id)
            .all(self.db)
            .await
    }
}
