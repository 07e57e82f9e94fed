use sea_orm::DatabaseConnection;

use crate::server::{
    error::AppError,
    model::alert::{generate_alerts, Alert},
    service::resource::ResourceService,
};

pub struct AlertService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlertService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Samples host resources and checks store reachability, then applies the thresholds.
    ///
    /// A failed ping is reported as an alert rather than an error.
    ///
    /// # Returns
    /// - `Ok((Vec<Alert>, DateTime<Utc>))` - Alerts and the time the sample was taken
    /// - `Err(AppError::InternalErr)` - Resource sampling failed
    pub async fn check(&self) -> Result<(Vec<Alert>, chrono::DateTime<chrono::Utc>), AppError> {
        let snapshot = ResourceService::sample().await?;

        let database_reachable = match self.db.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Database ping failed: {}", err);
                false
            }
        };

        Ok((
            generate_alerts(&snapshot, database_reachable),
            snapshot.taken_at,
        ))
    }
}
