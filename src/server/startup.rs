use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set and falls back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the game's MySQL database.
///
/// Establishes a connection pool sized from configuration. The schema belongs to the
/// game server, so no migrations are run; the dashboard only reads.
///
/// # Arguments
/// - `config` - Application configuration containing the database location and credentials
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database pool
/// - `Err(AppError)` - Invalid database URL or failed to connect
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(config.database_url()?);
    opt.max_connections(config.db_max_connections)
        .sqlx_logging(false);

    tracing::info!(
        "Connecting to database {} at {}:{}",
        config.db_name,
        config.db_host,
        config.db_port
    );

    let db = Database::connect(opt).await?;

    Ok(db)
}
