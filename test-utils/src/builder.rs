use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a subset of the game schema.
///
/// Add entity tables with `with_table()` or one of the grouped helpers, then call
/// `build()`. Tables that are never added simply do not exist, which is how tests
/// reproduce deployments missing optional tables such as `log`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Airline};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Airline)
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
    /// backend syntax. The table is created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user tracking tables.
    ///
    /// Adds `user`, `user_airline`, `user_ip`, `user_modifier` and `user_uuid`. Listing
    /// endpoints that resolve airline names additionally need `with_table(Airline)` or
    /// `with_airline_tables()`.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
            .with_table(UserAirline)
            .with_table(UserIp)
            .with_table(UserModifier)
            .with_table(UserUuid)
    }

    /// Adds the airline operation tables.
    ///
    /// Adds `airline`, `airline_info`, `airport`, `link`, `link_consumption`,
    /// `airplane_model`, `airplane` and `airline_base`.
    pub fn with_airline_tables(self) -> Self {
        self.with_table(Airline)
            .with_table(AirlineInfo)
            .with_table(Airport)
            .with_table(Link)
            .with_table(LinkConsumption)
            .with_table(AirplaneModel)
            .with_table(Airplane)
            .with_table(AirlineBase)
    }

    /// Adds every table the dashboard reads, including `log`.
    pub fn with_all_tables(self) -> Self {
        self.with_user_tables().with_airline_tables().with_table(Log)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
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
