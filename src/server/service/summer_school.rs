use sea_orm::DatabaseConnection;

use crate::server::{
    data::summer_school::SummerSchoolRepository, error::AppError,
    model::summer_school::SummerSchoolProject,
};

pub struct SummerSchoolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SummerSchoolService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_projects(&self, year: i32) -> Result<Vec<SummerSchoolProject>, AppError> {
        let projects = SummerSchoolRepository::new(self.db).get_by_year(year).await?;

        Ok(projects
            .into_iter()
            .map(SummerSchoolProject::from_entity)
            .collect())
    }
}
