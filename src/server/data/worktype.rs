use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct WorktypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WorktypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every worktype ordered by id.
    pub async fn get_all(&self) -> Result<Vec<entity::worktype::Model>, DbErr> {
        entity::prelude::Worktype::find()
            .order_by_asc(entity::worktype::Column::Id)
            .all(self.db)
            .await
    }
}
