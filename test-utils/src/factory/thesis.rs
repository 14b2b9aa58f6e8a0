//! Thesis factory for creating test thesis entities.
//!
//! Theses reference a worktype, a course and a supervising staff member; the factory takes
//! their ids explicitly. Use `helpers::create_thesis_with_dependencies` to create them all.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test theses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let thesis = ThesisFactory::new(&db, worktype.id, course.id, staff.id)
///     .publish_year(2020)
///     .recomended(true)
///     .build()
///     .await?;
/// ```
pub struct ThesisFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::thesis::Model,
}

impl<'a> ThesisFactory<'a> {
    /// Creates a new ThesisFactory with default values.
    ///
    /// Defaults:
    /// - name_ru: `"Работа {n}"`
    /// - author: `"Author {n}"`
    /// - text_uri: `"Author_{n}_text.pdf"`
    /// - publish_year: `2021`
    /// - recomended: `false`
    /// - temporary: `false`
    pub fn new(
        db: &'a DatabaseConnection,
        type_id: i32,
        course_id: i32,
        supervisor_id: i32,
    ) -> Self {
        let id = next_id();
        let entity = entity::thesis::Model {
            id: 0,
            name_ru: format!("Работа {}", id),
            name_en: None,
            description: None,
            author: format!("Author {}", id),
            text_uri: Some(format!("Author_{}_text.pdf", id)),
            presentation_uri: None,
            supervisor_review_uri: None,
            reviewer_review_uri: None,
            source_uri: None,
            publish_year: 2021,
            type_id,
            course_id,
            supervisor_id,
            reviewer_id: None,
            recomended: false,
            temporary: false,
        };

        Self { db, entity }
    }

    pub fn name_ru(mut self, name_ru: impl Into<String>) -> Self {
        self.entity.name_ru = name_ru.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.entity.author = author.into();
        self
    }

    pub fn text_uri(mut self, text_uri: Option<&str>) -> Self {
        self.entity.text_uri = text_uri.map(str::to_string);
        self
    }

    pub fn presentation_uri(mut self, presentation_uri: Option<&str>) -> Self {
        self.entity.presentation_uri = presentation_uri.map(str::to_string);
        self
    }

    pub fn supervisor_review_uri(mut self, uri: Option<&str>) -> Self {
        self.entity.supervisor_review_uri = uri.map(str::to_string);
        self
    }

    pub fn reviewer_review_uri(mut self, uri: Option<&str>) -> Self {
        self.entity.reviewer_review_uri = uri.map(str::to_string);
        self
    }

    pub fn publish_year(mut self, publish_year: i32) -> Self {
        self.entity.publish_year = publish_year;
        self
    }

    pub fn recomended(mut self, recomended: bool) -> Self {
        self.entity.recomended = recomended;
        self
    }

    pub fn temporary(mut self, temporary: bool) -> Self {
        self.entity.temporary = temporary;
        self
    }

    /// Builds and inserts the thesis entity into the database.
    pub async fn build(self) -> Result<entity::thesis::Model, DbErr> {
        let e = self.entity;
        entity::thesis::ActiveModel {
            id: ActiveValue::NotSet,
            name_ru: ActiveValue::Set(e.name_ru),
            name_en: ActiveValue::Set(e.name_en),
            description: ActiveValue::Set(e.description),
            author: ActiveValue::Set(e.author),
            text_uri: ActiveValue::Set(e.text_uri),
            presentation_uri: ActiveValue::Set(e.presentation_uri),
            supervisor_review_uri: ActiveValue::Set(e.supervisor_review_uri),
            reviewer_review_uri: ActiveValue::Set(e.reviewer_review_uri),
            source_uri: ActiveValue::Set(e.source_uri),
            publish_year: ActiveValue::Set(e.publish_year),
            type_id: ActiveValue::Set(e.type_id),
            course_id: ActiveValue::Set(e.course_id),
            supervisor_id: ActiveValue::Set(e.supervisor_id),
            reviewer_id: ActiveValue::Set(e.reviewer_id),
            recomended: ActiveValue::Set(e.recomended),
            temporary: ActiveValue::Set(e.temporary),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published thesis with default values.
pub async fn create_thesis(
    db: &DatabaseConnection,
    type_id: i32,
    course_id: i32,
    supervisor_id: i32,
) -> Result<entity::thesis::Model, DbErr> {
    ThesisFactory::new(db, type_id, course_id, supervisor_id)
        .build()
        .await
}
