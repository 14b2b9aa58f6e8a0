//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db)
///     .last_name("Терехов")
///     .first_name("Андрей")
///     .middle_name(Some("Николаевич"))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: Option<String>,
    first_name: String,
    middle_name: Option<String>,
    last_name: String,
    avatar_uri: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - first_name: `"First {id}"`
    /// - middle_name: `None`
    /// - last_name: `"Last {id}"`
    /// - avatar_uri: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: Some(format!("user{}@example.com", id)),
            first_name: format!("First {}", id),
            middle_name: None,
            last_name: format!("Last {}", id),
            avatar_uri: None,
        }
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn middle_name(mut self, middle_name: Option<&str>) -> Self {
        self.middle_name = middle_name.map(str::to_string);
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn avatar_uri(mut self, avatar_uri: Option<&str>) -> Self {
        self.avatar_uri = avatar_uri.map(str::to_string);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::users::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::users::Model, DbErr> {
        entity::users::ActiveModel {
            id: ActiveValue::NotSet,
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(None),
            first_name: ActiveValue::Set(self.first_name),
            middle_name: ActiveValue::Set(self.middle_name),
            last_name: ActiveValue::Set(self.last_name),
            avatar_uri: ActiveValue::Set(self.avatar_uri),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::users::Model, DbErr> {
    UserFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Users).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(user.first_name.starts_with("First"));
        assert!(user.last_name.starts_with("Last"));
        assert!(user.middle_name.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_users_with_unique_emails() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Users).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_user(db).await?;
        let second = create_user(db).await?;

        assert_ne!(first.email, second.email);

        Ok(())
    }
}
