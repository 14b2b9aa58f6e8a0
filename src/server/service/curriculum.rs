use sea_orm::DatabaseConnection;

use crate::server::{
    data::curriculum::CurriculumRepository,
    error::AppError,
    model::curriculum::{CurriculumEntry, StudyYear, BACHELOR_STUDY_YEARS},
};

pub struct CurriculumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CurriculumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the curriculum of a bachelor course grouped by study year.
    ///
    /// Every year from 1 to 4 is present, possibly without disciplines.
    pub async fn get_bachelor_curriculum(&self, course_id: i32) -> Result<Vec<StudyYear>, AppError> {
        let repo = CurriculumRepository::new(self.db);
        let mut years = Vec::with_capacity(BACHELOR_STUDY_YEARS as usize);

        for year in 1..=BACHELOR_STUDY_YEARS {
            let entries = repo
                .get_by_course_and_year(course_id, year)
                .await?
                .into_iter()
                .map(CurriculumEntry::from_entity)
                .collect();

            years.push(StudyYear { year, entries });
        }

        Ok(years)
    }
}
