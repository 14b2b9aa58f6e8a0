//! Curriculum factory for creating test curriculum entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating curriculum entries of a course.
pub struct CurriculumFactory<'a> {
    db: &'a DatabaseConnection,
    course_id: i32,
    study_year: i32,
    kind: String,
    discipline: String,
}

impl<'a> CurriculumFactory<'a> {
    /// Creates a new CurriculumFactory for the course.
    ///
    /// Defaults:
    /// - study_year: `1`
    /// - kind: `"Базовая часть"`
    /// - discipline: `"Discipline {n}"`
    pub fn new(db: &'a DatabaseConnection, course_id: i32) -> Self {
        Self {
            db,
            course_id,
            study_year: 1,
            kind: "Базовая часть".to_string(),
            discipline: format!("Discipline {}", next_id()),
        }
    }

    pub fn study_year(mut self, study_year: i32) -> Self {
        self.study_year = study_year;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn discipline(mut self, discipline: impl Into<String>) -> Self {
        self.discipline = discipline.into();
        self
    }

    /// Builds and inserts the curriculum entity into the database.
    pub async fn build(self) -> Result<entity::curriculum::Model, DbErr> {
        entity::curriculum::ActiveModel {
            id: ActiveValue::NotSet,
            course_id: ActiveValue::Set(self.course_id),
            study_year: ActiveValue::Set(self.study_year),
            kind: ActiveValue::Set(self.kind),
            discipline: ActiveValue::Set(self.discipline),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a first-year curriculum entry with default values.
pub async fn create_curriculum(
    db: &DatabaseConnection,
    course_id: i32,
) -> Result<entity::curriculum::Model, DbErr> {
    CurriculumFactory::new(db, course_id).build().await
}
