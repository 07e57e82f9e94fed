use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::activity::DailyActivity,
};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts active users per calendar date over the last `days` days.
    ///
    /// # Arguments
    /// - `days` - Window length, already clamped by the caller
    ///
    /// # Returns
    /// - `Ok(Vec<DailyActivity>)` - One bucket per date with activity, newest first
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_activity(&self, days: i64) -> Result<Vec<DailyActivity>, AppError> {
        let since = Utc::now().naive_utc() - Duration::days(days);

        let activity = UserRepository::new(self.db)
            .count_active_by_date(since)
            .await?;

        Ok(activity)
    }
}
