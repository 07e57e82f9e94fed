//! Airline Admin Test Utils
//!
//! Provides shared testing utilities for the admin dashboard. The game schema is owned by
//! the game server, so tests recreate the tables they need from the SeaORM entities inside
//! an in-memory SQLite database and populate them through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which game tables exist
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories for users, airlines, routes, fleets and logs
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_user_listing() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_user_tables().build().await?;
//!     let db = test.db.unwrap();
//!     // Insert rows with factories, then exercise repositories...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
