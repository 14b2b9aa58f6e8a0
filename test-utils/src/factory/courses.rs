//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses (study programmes).
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    name: String,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with an auto-assigned id and `"Course {n}"` name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            name: format!("Course {}", next_id()),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::courses::Model, DbErr> {
        entity::courses::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::courses::Model, DbErr> {
    CourseFactory::new(db).build().await
}
