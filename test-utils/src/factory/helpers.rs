//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a staff member together with the user account it belongs to.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, staff))` - Created user and staff entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_staff_with_user(
    db: &DatabaseConnection,
) -> Result<(entity::users::Model, entity::staff::Model), DbErr> {
    let user = crate::factory::users::create_user(db).await?;
    let staff = crate::factory::staff::create_staff(db, user.id).await?;

    Ok((user, staff))
}

/// Creates a complete thesis hierarchy with all dependencies.
///
/// Creates, with default values:
/// 1. User and Staff (as supervisor)
/// 2. Worktype
/// 3. Course
/// 4. Thesis
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((staff, worktype, course, thesis))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_thesis_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::staff::Model,
        entity::worktype::Model,
        entity::courses::Model,
        entity::thesis::Model,
    ),
    DbErr,
> {
    let (_, staff) = create_staff_with_user(db).await?;
    let worktype = crate::factory::worktype::create_worktype(db).await?;
    let course = crate::factory::courses::create_course(db).await?;
    let thesis = crate::factory::thesis::create_thesis(db, worktype.id, course.id, staff.id).await?;

    Ok((staff, worktype, course, thesis))
}
