//! Staff factory for creating test staff entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test staff members with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let staff = StaffFactory::new(&db, user.id)
///     .position("Доцент")
///     .science_degree(Some("к.ф.-м.н."))
///     .still_working(false)
///     .build()
///     .await?;
/// ```
pub struct StaffFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    position: String,
    science_degree: Option<String>,
    official_email: Option<String>,
    still_working: bool,
}

impl<'a> StaffFactory<'a> {
    /// Creates a new StaffFactory with default values.
    ///
    /// Defaults:
    /// - position: `"Доцент"`
    /// - science_degree: `None`
    /// - official_email: `None`
    /// - still_working: `true`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            position: "Доцент".to_string(),
            science_degree: None,
            official_email: None,
            still_working: true,
        }
    }

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn science_degree(mut self, science_degree: Option<&str>) -> Self {
        self.science_degree = science_degree.map(str::to_string);
        self
    }

    pub fn official_email(mut self, official_email: Option<&str>) -> Self {
        self.official_email = official_email.map(str::to_string);
        self
    }

    pub fn still_working(mut self, still_working: bool) -> Self {
        self.still_working = still_working;
        self
    }

    /// Builds and inserts the staff entity into the database.
    pub async fn build(self) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            position: ActiveValue::Set(self.position),
            science_degree: ActiveValue::Set(self.science_degree),
            official_email: ActiveValue::Set(self.official_email),
            still_working: ActiveValue::Set(self.still_working),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a working staff member with default values for the given user.
pub async fn create_staff(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::staff::Model, DbErr> {
    StaffFactory::new(db, user_id).build().await
}
