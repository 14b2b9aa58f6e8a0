//! Generic data access for the admin backend.
//!
//! Lists, lookups and deletions are the same for every admin resource and are expressed
//! once over any SeaORM entity with an integer primary key. Inserts and updates are built
//! by each resource from its own form.

use std::marker::PhantomData;

use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Iterable, PaginatorTrait, PrimaryKeyToColumn,
    PrimaryKeyTrait, QueryOrder,
};

pub struct AdminRepository<'a, E> {
    db: &'a DatabaseConnection,
    entity: PhantomData<E>,
}

impl<'a, E> AdminRepository<'a, E>
where
    E: EntityTrait,
    E::Model: Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    /// Gets one page of records ordered by primary key.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Number of records per page
    ///
    /// # Returns
    /// - `Ok((records, total))` - Records of the page and the total record count
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<E::Model>, u64), DbErr> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let records = paginator.fetch_page(page).await?;

        Ok((records, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(self.db).await
    }

    /// Deletes a record by id, returning whether it existed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
