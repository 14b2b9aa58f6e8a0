//! Staff data repository.
//!
//! Staff rows are always loaded together with the user account holding the person's name
//! and avatar.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets staff members still working at the department, ordered by id.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of staff members to return, `None` for all
    ///
    /// # Returns
    /// - `Ok(Vec<(staff, user)>)` - Staff rows with their user accounts
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_working(
        &self,
        limit: Option<u64>,
    ) -> Result<Vec<(entity::staff::Model, entity::users::Model)>, DbErr> {
        let mut query = entity::prelude::Staff::find()
            .filter(entity::staff::Column::StillWorking.eq(true))
            .order_by_asc(entity::staff::Column::Id);

        if let Some(limit) = limit {
            query = query.limit(limit);
        }

        let rows = query
            .find_also_related(entity::prelude::Users)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(staff, user)| user.map(|user| (staff, user)))
            .collect())
    }

    /// Gets every staff member, working or not, with their user accounts.
    pub async fn get_all(
        &self,
    ) -> Result<Vec<(entity::staff::Model, entity::users::Model)>, DbErr> {
        let rows = entity::prelude::Staff::find()
            .order_by_asc(entity::staff::Column::Id)
            .find_also_related(entity::prelude::Users)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(staff, user)| user.map(|user| (staff, user)))
            .collect())
    }

    /// Finds the first staff record of a user account.
    pub async fn find_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find()
            .filter(entity::staff::Column::UserId.eq(user_id))
            .order_by_asc(entity::staff::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets staff members by id together with their user accounts.
    ///
    /// Ids without a staff row are skipped.
    pub async fn get_by_ids(
        &self,
        ids: Vec<i32>,
    ) -> Result<Vec<(entity::staff::Model, entity::users::Model)>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Staff::find()
            .filter(entity::staff::Column::Id.is_in(ids))
            .find_also_related(entity::prelude::Users)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(staff, user)| user.map(|user| (staff, user)))
            .collect())
    }
}
