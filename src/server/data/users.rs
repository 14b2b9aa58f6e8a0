use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the first user with the provided last name.
    ///
    /// # Arguments
    /// - `last_name` - Exact last name to match
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The user with the lowest id carrying that last name
    /// - `Ok(None)` - No user has that last name
    /// - `Err(DbErr)` - Database error during lookup
    pub async fn find_by_last_name(
        &self,
        last_name: &str,
    ) -> Result<Option<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .filter(entity::users::Column::LastName.eq(last_name))
            .order_by_asc(entity::users::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets every user ordered by last name, then first name.
    pub async fn get_all(&self) -> Result<Vec<entity::users::Model>, DbErr> {
        entity::prelude::Users::find()
            .order_by_asc(entity::users::Column::LastName)
            .order_by_asc(entity::users::Column::FirstName)
            .all(self.db)
            .await
    }
}
