use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airline::AirlineRepository, log::LogRepository},
    error::AppError,
    model::log::{LogEntry, RecentLogs},
    util::schema::is_missing_table,
};

pub struct LogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the newest game log rows with airline names.
    ///
    /// Deployments without a `log` table yield `RecentLogs::TableMissing` instead of an
    /// error.
    ///
    /// # Arguments
    /// - `limit` - Maximum rows, already clamped by the caller
    ///
    /// # Returns
    /// - `Ok(RecentLogs)` - Entries, or the missing-table marker
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn get_recent(&self, limit: u64) -> Result<RecentLogs, AppError> {
        let rows = match LogRepository::new(self.db).get_recent(limit).await {
            Ok(rows) => rows,
            Err(err) if is_missing_table(&err) => {
                tracing::debug!("Log table not present: {}", err);
                return Ok(RecentLogs::TableMissing);
            }
            Err(err) => return Err(err.into()),
        };

        let mut airline_ids: Vec<i32> = rows.iter().map(|r| r.airline).collect();
        airline_ids.sort_unstable();
        airline_ids.dedup();
        let names = AirlineRepository::new(self.db)
            .get_names(&airline_ids)
            .await?;

        Ok(RecentLogs::Entries(
            rows.into_iter()
                .map(|row| LogEntry::from_entity(row, &names))
                .collect(),
        ))
    }
}
