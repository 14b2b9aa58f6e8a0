//! Thesis directory domain models.

use crate::server::{
    model::{pagination::Pagination, upload::FileKind},
    storage::{Area, ThesisStorage},
};

/// Theses shown per page of the directory.
pub const THESES_PER_PAGE: u64 = 10;

/// Worktype id meaning "any worktype".
pub const ALL_WORKTYPES: i32 = 1;

/// Course and supervisor filter value meaning "any".
pub const ANY: i32 = 0;

/// Year used for both range bounds when no thesis has been published yet.
pub const FALLBACK_YEAR: i32 = 2020;

/// Label of the "any" choice in filter selects.
pub const ANY_LABEL: &str = "Все";

/// One choice of a filter select.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: i32,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: i32, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    pub fn any() -> Self {
        Self::new(ANY, ANY_LABEL)
    }
}

/// Choices offered by the thesis search form.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisFilterOptions {
    pub worktypes: Vec<SelectOption>,
    pub courses: Vec<SelectOption>,
    pub supervisors: Vec<SelectOption>,
    /// Publication years, newest first.
    pub years: Vec<i32>,
}

/// Search request as received from the directory page.
///
/// Missing range bounds default to the oldest and newest publication years.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchThesesParam {
    pub worktype: i32,
    pub page: i64,
    pub supervisor: i32,
    pub course: i32,
    pub startdate: Option<i32>,
    pub enddate: Option<i32>,
}

impl Default for SearchThesesParam {
    fn default() -> Self {
        Self {
            worktype: ALL_WORKTYPES,
            page: 1,
            supervisor: ANY,
            course: ANY,
            startdate: None,
            enddate: None,
        }
    }
}

/// Filter values actually applied to a search.
///
/// Course and supervisor values that match no thesis are reset to [`ANY`], and the year
/// range is never inverted.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisFilter {
    pub worktype: i32,
    pub course: i32,
    pub supervisor: i32,
    pub startdate: i32,
    pub enddate: i32,
}

impl ThesisFilter {
    /// Query string requesting `page` of this filter from `/fetch_theses`.
    pub fn query(&self, page: u64) -> String {
        format!(
            "worktype={}&supervisor={}&course={}&startdate={}&enddate={}&page={}",
            self.worktype, self.supervisor, self.course, self.startdate, self.enddate, page
        )
    }
}

/// A file attached to a thesis.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisFile {
    pub kind: FileKind,
    /// Stored file name.
    pub name: String,
    /// Site-relative URL path.
    pub url: String,
}

/// A thesis with its lookup values resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisCard {
    pub id: i32,
    pub name_ru: String,
    pub name_en: Option<String>,
    pub description: Option<String>,
    pub author: String,
    pub publish_year: i32,
    pub worktype: String,
    pub course: String,
    pub supervisor: String,
    pub files: Vec<ThesisFile>,
    pub source_uri: Option<String>,
}

impl ThesisCard {
    pub fn from_entity(
        thesis: entity::thesis::Model,
        worktype: String,
        course: String,
        supervisor: String,
    ) -> Self {
        let area = if thesis.temporary {
            Area::Staging
        } else {
            Area::Published
        };
        let files = stored_files(&thesis)
            .into_iter()
            .map(|(kind, name)| ThesisFile {
                kind,
                url: ThesisStorage::url_path(area, kind, &name),
                name,
            })
            .collect();

        Self {
            id: thesis.id,
            name_ru: thesis.name_ru,
            name_en: thesis.name_en,
            description: thesis.description,
            author: thesis.author,
            publish_year: thesis.publish_year,
            worktype,
            course,
            supervisor,
            files,
            source_uri: thesis.source_uri,
        }
    }
}

/// Stored file names of a thesis paired with their kinds.
pub fn stored_files(thesis: &entity::thesis::Model) -> Vec<(FileKind, String)> {
    [
        (FileKind::Text, &thesis.text_uri),
        (FileKind::Slides, &thesis.presentation_uri),
        (FileKind::SupervisorReview, &thesis.supervisor_review_uri),
        (FileKind::ReviewerReview, &thesis.reviewer_review_uri),
    ]
    .into_iter()
    .filter_map(|(kind, name)| {
        name.as_ref()
            .filter(|name| !name.is_empty())
            .map(|name| (kind, name.clone()))
    })
    .collect()
}

/// One page of search results together with the filter that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisSearchPage {
    pub theses: Vec<ThesisCard>,
    pub filter: ThesisFilter,
    pub pagination: Pagination,
}

/// Database-level criteria for a thesis search.
#[derive(Debug, Clone, PartialEq)]
pub struct ThesisQueryParam {
    pub start_year: i32,
    pub end_year: i32,
    pub course_id: Option<i32>,
    pub supervisor_id: Option<i32>,
    pub type_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_query_carries_every_value() {
        let filter = ThesisFilter {
            worktype: 3,
            course: 2,
            supervisor: 7,
            startdate: 2018,
            enddate: 2021,
        };

        assert_eq!(
            filter.query(4),
            "worktype=3&supervisor=7&course=2&startdate=2018&enddate=2021&page=4"
        );
    }
}
