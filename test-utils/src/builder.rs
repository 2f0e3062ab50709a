use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts with customizable database schemas.
///
/// Adds entity tables through `with_table`, then `build()` connects an
/// in-memory SQLite database and creates them in insertion order, so tables
/// with foreign keys go after the tables they reference.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds a CREATE TABLE statement generated from the given entity.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every catalog table in dependency order: User,
    /// SystemRequirement, Game, Coupon.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(User)
            .with_table(SystemRequirement)
            .with_table(Game)
            .with_table(Coupon)
    }

    /// Connects the in-memory database and creates the configured tables.
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
