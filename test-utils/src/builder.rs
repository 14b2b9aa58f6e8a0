use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Users, Staff};
///
/// let test = TestBuilder::new()
///     .with_table(Users)
///     .with_table(Staff)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for staff operations.
    ///
    /// Adds, in dependency order:
    /// - Users
    /// - Staff
    pub fn with_staff_tables(self) -> Self {
        self.with_table(Users).with_table(Staff)
    }

    /// Adds all tables required for thesis operations.
    ///
    /// Adds, in dependency order:
    /// - Users
    /// - Staff
    /// - Worktype
    /// - Courses
    /// - Thesis
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_thesis_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_thesis_tables(self) -> Self {
        self.with_staff_tables()
            .with_table(Worktype)
            .with_table(Courses)
            .with_table(Thesis)
    }

    /// Adds every table of the application schema.
    pub fn with_all_tables(self) -> Self {
        self.with_thesis_tables()
            .with_table(Curriculum)
            .with_table(SummerSchool)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
