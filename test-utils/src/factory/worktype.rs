//! Worktype factory for creating test worktype entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test worktypes.
///
/// The id can be fixed to mirror the seeded worktypes (1 means "all types").
pub struct WorktypeFactory<'a> {
    db: &'a DatabaseConnection,
    id: Option<i32>,
    kind: String,
}

impl<'a> WorktypeFactory<'a> {
    /// Creates a new WorktypeFactory with an auto-assigned id and `"Worktype {n}"` name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: None,
            kind: format!("Worktype {}", next_id()),
        }
    }

    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Builds and inserts the worktype entity into the database.
    pub async fn build(self) -> Result<entity::worktype::Model, DbErr> {
        entity::worktype::ActiveModel {
            id: match self.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::NotSet,
            },
            kind: ActiveValue::Set(self.kind),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a worktype with default values.
pub async fn create_worktype(db: &DatabaseConnection) -> Result<entity::worktype::Model, DbErr> {
    WorktypeFactory::new(db).build().await
}
