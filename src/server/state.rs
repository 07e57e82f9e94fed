//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! through Axum's state extraction. It holds no mutable data: the database pool and the
//! container runtime settings are the only things requests share.

use sea_orm::DatabaseConnection;

use crate::server::service::container::ContainerRuntime;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ContainerRuntime` is a program name and a timeout
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the game database.
    ///
    /// Each request checks out a connection for the duration of its queries; the
    /// connection returns to the pool when the query future completes or is dropped.
    pub db: DatabaseConnection,

    /// Container runtime CLI used by the container status endpoint.
    pub container_runtime: ContainerRuntime,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `container_runtime` - Container runtime program and timeout
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, container_runtime: ContainerRuntime) -> Self {
        Self {
            db,
            container_runtime,
        }
    }
}
