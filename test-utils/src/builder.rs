use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{District, Taluk};
///
/// let test = TestBuilder::new()
///     .with_table(District)
///     .with_table(Taluk)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all reference ("master") domain tables in dependency order:
    /// VehicleType, VehicleMake, CaseStatus, Reason, District, Taluk.
    ///
    /// Use this when testing report materialization across multiple
    /// domains. Add `SlaThreshold` separately when the test classifies SLA
    /// columns.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reference_tables(self) -> Self {
        self.with_table(VehicleType)
            .with_table(VehicleMake)
            .with_table(CaseStatus)
            .with_table(Reason)
            .with_table(District)
            .with_table(Taluk)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables
    /// - `Err(TestError::Database)` - Failed to connect or create tables
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
