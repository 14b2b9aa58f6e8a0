use sea_orm::DatabaseConnection;

use crate::server::{data::staff::StaffRepository, error::AppError, model::staff::StaffMember};

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets staff members still working at the department.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of members, `None` for everyone
    pub async fn get_working(&self, limit: Option<u64>) -> Result<Vec<StaffMember>, AppError> {
        let rows = StaffRepository::new(self.db).get_working(limit).await?;

        Ok(rows
            .into_iter()
            .map(|(staff, user)| StaffMember::from_entity(staff, &user))
            .collect())
    }
}
