use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct CurriculumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CurriculumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the disciplines of one study year of a course.
    ///
    /// # Arguments
    /// - `course_id` - Course the curriculum belongs to
    /// - `study_year` - Study year, starting at 1
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Disciplines ordered by discipline block, then id
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_course_and_year(
        &self,
        course_id: i32,
        study_year: i32,
    ) -> Result<Vec<entity::curriculum::Model>, DbErr> {
        entity::prelude::Curriculum::find()
            .filter(entity::curriculum::Column::CourseId.eq(course_id))
            .filter(entity::curriculum::Column::StudyYear.eq(study_year))
            .order_by_asc(entity::curriculum::Column::Kind)
            .order_by_asc(entity::curriculum::Column::Id)
            .all(self.db)
            .await
    }
}
