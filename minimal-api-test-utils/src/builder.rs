//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring the in-memory test
//! database before a test runs. Configuration methods only queue work; tables are
//! created and fixtures inserted during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_schema: bool,

    // Database fixtures to insert
    administrators: Vec<(String, String)>, // (email, role)
    vehicles: Vec<(String, String, i32)>,  // (name, brand, year)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_schema: false,
            administrators: Vec::new(),
            vehicles: Vec::new(),
        }
    }

    /// Add both the `Administradores` and `Veiculos` tables to the test database.
    pub fn with_schema(mut self) -> Self {
        self.include_schema = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    ///
    /// ```no_run
    /// use minimal_api_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), minimal_api_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Vehicle)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock administrator during `build()`.
    ///
    /// The stored password is a placeholder rather than a real hash.
    pub fn with_mock_administrator(
        mut self,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        self.administrators.push((email.into(), role.into()));
        self
    }

    /// Insert a mock vehicle during `build()`.
    pub fn with_mock_vehicle(
        mut self,
        name: impl Into<String>,
        brand: impl Into<String>,
        year: i32,
    ) -> Self {
        self.vehicles.push((name.into(), brand.into(), year));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (schema tables if specified, then custom tables)
    /// 2. Inserts administrator fixtures, then vehicle fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_schema {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Administrator),
                schema.create_table_from_entity(entity::prelude::Vehicle),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (email, role) in self.administrators {
            setup
                .administrator()
                .insert_mock_administrator(&email, &role)
                .await?;
        }

        for (name, brand, year) in self.vehicles {
            setup
                .vehicle()
                .insert_mock_vehicle(&name, &brand, year)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
