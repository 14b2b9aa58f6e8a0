//! Thesis directory business logic.
//!
//! Builds the search form choices, resolves lenient search requests into the filter that
//! is actually applied, and turns thesis rows into display cards.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        courses::CourseRepository, staff::StaffRepository, thesis::ThesisRepository,
        worktype::WorktypeRepository,
    },
    error::AppError,
    model::{
        pagination::Pagination,
        staff::PersonName,
        thesis::{
            SearchThesesParam, SelectOption, ThesisCard, ThesisFilter, ThesisFilterOptions,
            ThesisQueryParam, ThesisSearchPage, ALL_WORKTYPES, ANY, FALLBACK_YEAR,
            THESES_PER_PAGE,
        },
    },
};

pub struct ThesisService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ThesisService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the choices of the thesis search form.
    ///
    /// Courses and supervisors are limited to those referenced by some thesis and sorted
    /// by label, with the "any" choice first.
    pub async fn get_filter_options(&self) -> Result<ThesisFilterOptions, AppError> {
        let thesis_repo = ThesisRepository::new(self.db);

        let worktypes = WorktypeRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|worktype| SelectOption::new(worktype.id, worktype.kind))
            .collect();

        let course_ids = thesis_repo.get_course_ids().await?;
        let mut courses: Vec<SelectOption> = CourseRepository::new(self.db)
            .get_by_ids(course_ids)
            .await?
            .into_iter()
            .map(|course| SelectOption::new(course.id, course.name))
            .collect();
        courses.sort_by(|a, b| a.label.cmp(&b.label));
        courses.insert(0, SelectOption::any());

        let supervisor_ids = thesis_repo.get_supervisor_ids().await?;
        let mut supervisors: Vec<SelectOption> = StaffRepository::new(self.db)
            .get_by_ids(supervisor_ids)
            .await?
            .into_iter()
            .map(|(staff, user)| {
                SelectOption::new(staff.id, PersonName::from_entity(&user).short_label())
            })
            .collect();
        supervisors.sort_by(|a, b| a.label.cmp(&b.label));
        supervisors.insert(0, SelectOption::any());

        let years = thesis_repo.get_publish_years().await?;

        Ok(ThesisFilterOptions {
            worktypes,
            courses,
            supervisors,
            years,
        })
    }

    /// Searches published theses.
    ///
    /// # Arguments
    /// - `param` - Search request; range bounds default to the oldest and newest years
    ///
    /// # Returns
    /// - `Ok(ThesisSearchPage)` - Theses of the requested page with the filter actually
    ///   applied. Course and supervisor values matching no thesis are reset to "any" and
    ///   an end year before the start year is raised to the start year.
    /// - `Err(AppError::DbErr)` - Database error during queries
    pub async fn search(&self, param: SearchThesesParam) -> Result<ThesisSearchPage, AppError> {
        let repo = ThesisRepository::new(self.db);

        let years = repo.get_publish_years().await?;
        let (oldest, newest) = match (years.last(), years.first()) {
            (Some(oldest), Some(newest)) => (*oldest, *newest),
            _ => (FALLBACK_YEAR, FALLBACK_YEAR),
        };

        let startdate = param.startdate.unwrap_or(oldest);
        let enddate = param.enddate.unwrap_or(newest).max(startdate);

        let course = if param.course != ANY && repo.course_in_use(param.course).await? {
            param.course
        } else {
            ANY
        };
        let supervisor =
            if param.supervisor != ANY && repo.supervisor_in_use(param.supervisor).await? {
                param.supervisor
            } else {
                ANY
            };

        let filter = ThesisFilter {
            worktype: param.worktype,
            course,
            supervisor,
            startdate,
            enddate,
        };

        let query = ThesisQueryParam {
            start_year: startdate,
            end_year: enddate,
            course_id: (course != ANY).then_some(course),
            supervisor_id: (supervisor != ANY).then_some(supervisor),
            type_id: (param.worktype > ALL_WORKTYPES).then_some(param.worktype),
        };

        let page = u64::try_from(param.page.max(1)).unwrap_or(1);
        let (theses, total) = repo.search(query, page - 1, THESES_PER_PAGE).await?;

        Ok(ThesisSearchPage {
            theses: self.to_cards(theses).await?,
            filter,
            pagination: Pagination::new(page, THESES_PER_PAGE, total),
        })
    }

    /// Gets up to `limit` random recommended theses.
    pub async fn get_recommended(&self, limit: u64) -> Result<Vec<ThesisCard>, AppError> {
        let theses = ThesisRepository::new(self.db)
            .get_random_recommended(limit)
            .await?;

        self.to_cards(theses).await
    }

    /// Resolves worktype, course and supervisor names of thesis rows.
    pub async fn to_cards(
        &self,
        theses: Vec<entity::thesis::Model>,
    ) -> Result<Vec<ThesisCard>, AppError> {
        if theses.is_empty() {
            return Ok(Vec::new());
        }

        let worktypes: HashMap<i32, String> = WorktypeRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .map(|worktype| (worktype.id, worktype.kind))
            .collect();

        let mut course_ids: Vec<i32> = theses.iter().map(|t| t.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();
        let courses: HashMap<i32, String> = CourseRepository::new(self.db)
            .get_by_ids(course_ids)
            .await?
            .into_iter()
            .map(|course| (course.id, course.name))
            .collect();

        let mut supervisor_ids: Vec<i32> = theses.iter().map(|t| t.supervisor_id).collect();
        supervisor_ids.sort_unstable();
        supervisor_ids.dedup();
        let supervisors: HashMap<i32, String> = StaffRepository::new(self.db)
            .get_by_ids(supervisor_ids)
            .await?
            .into_iter()
            .map(|(staff, user)| (staff.id, PersonName::from_entity(&user).full_name()))
            .collect();

        Ok(theses
            .into_iter()
            .map(|thesis| {
                let worktype = worktypes.get(&thesis.type_id).cloned().unwrap_or_default();
                let course = courses.get(&thesis.course_id).cloned().unwrap_or_default();
                let supervisor = supervisors
                    .get(&thesis.supervisor_id)
                    .cloned()
                    .unwrap_or_default();

                ThesisCard::from_entity(thesis, worktype, course, supervisor)
            })
            .collect())
    }
}
