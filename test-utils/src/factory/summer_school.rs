//! Summer school factory for creating test project entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating summer school projects.
pub struct SummerSchoolFactory<'a> {
    db: &'a DatabaseConnection,
    year: i32,
    project_name: String,
    description: String,
    repo: Option<String>,
}

impl<'a> SummerSchoolFactory<'a> {
    /// Creates a new SummerSchoolFactory.
    ///
    /// Defaults:
    /// - year: `2021`
    /// - project_name: `"Project {n}"`
    /// - description: `"Description"`
    /// - repo: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            year: 2021,
            project_name: format!("Project {}", next_id()),
            description: "Description".to_string(),
            repo: None,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn project_name(mut self, project_name: impl Into<String>) -> Self {
        self.project_name = project_name.into();
        self
    }

    pub fn repo(mut self, repo: Option<&str>) -> Self {
        self.repo = repo.map(str::to_string);
        self
    }

    /// Builds and inserts the project entity into the database.
    pub async fn build(self) -> Result<entity::summer_school::Model, DbErr> {
        entity::summer_school::ActiveModel {
            id: ActiveValue::NotSet,
            year: ActiveValue::Set(self.year),
            project_name: ActiveValue::Set(self.project_name),
            description: ActiveValue::Set(self.description),
            tech: ActiveValue::Set(None),
            repo: ActiveValue::Set(self.repo),
            demos: ActiveValue::Set(None),
            advisors: ActiveValue::Set(None),
            requirements: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a 2021 summer school project with default values.
pub async fn create_project(
    db: &DatabaseConnection,
) -> Result<entity::summer_school::Model, DbErr> {
    SummerSchoolFactory::new(db).build().await
}
