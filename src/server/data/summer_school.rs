use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct SummerSchoolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SummerSchoolRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the projects of one summer school edition, ordered by id.
    pub async fn get_by_year(
        &self,
        year: i32,
    ) -> Result<Vec<entity::summer_school::Model>, DbErr> {
        entity::prelude::SummerSchool::find()
            .filter(entity::summer_school::Column::Year.eq(year))
            .order_by_asc(entity::summer_school::Column::Id)
            .all(self.db)
            .await
    }
}
