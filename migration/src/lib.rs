pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_users_table;
mod m20260901_000002_create_staff_table;
mod m20260901_000003_create_worktype_table;
mod m20260901_000004_create_courses_table;
mod m20260901_000005_create_curriculum_table;
mod m20260901_000006_create_thesis_table;
mod m20260901_000007_create_summer_school_table;
mod m20260902_000008_seed_worktype_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_users_table::Migration),
            Box::new(m20260901_000002_create_staff_table::Migration),
            Box::new(m20260901_000003_create_worktype_table::Migration),
            Box::new(m20260901_000004_create_courses_table::Migration),
            Box::new(m20260901_000005_create_curriculum_table::Migration),
            Box::new(m20260901_000006_create_thesis_table::Migration),
            Box::new(m20260901_000007_create_summer_school_table::Migration),
            Box::new(m20260902_000008_seed_worktype_table::Migration),
        ]
    }
}
