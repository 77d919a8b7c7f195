use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, ReferralTier};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(ReferralTier)
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
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
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

    /// Adds every table the bonus resolver reads or writes.
    ///
    /// Adds, in dependency order:
    /// - User
    /// - ReferralTier
    /// - ReferralGlobalOverride
    /// - ReferralClientOverride
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_referral_tables(self) -> Self {
        self.with_table(User)
            .with_table(ReferralTier)
            .with_table(ReferralGlobalOverride)
            .with_table(ReferralClientOverride)
    }

    /// Adds every table the analytics reports aggregate over.
    ///
    /// Adds User, Order, ReferralEarning, Game and SystemSettings.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_analytics_tables(self) -> Self {
        self.with_table(User)
            .with_table(Order)
            .with_table(ReferralEarning)
            .with_table(Game)
            .with_table(SystemSettings)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
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
