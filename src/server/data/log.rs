//! Game log repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect};

pub struct LogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the newest log rows.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Rows ordered by cycle then id, newest first
    /// - `Err(DbErr)` - Database error, including a missing `log` table
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<entity::log::Model>, DbErr> {
        entity::prelude::Log::find()
            .order_by_desc(entity::log::Column::Cycle)
            .order_by_desc(entity::log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
