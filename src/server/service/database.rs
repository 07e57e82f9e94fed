use sea_orm::DatabaseConnection;

use crate::server::{
    data::{airline::AirlineRepository, database::DatabaseRepository, game::GameRepository},
    error::AppError,
    model::database::DatabaseStats,
};

pub struct DatabaseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Collects table row counts, airline and airport breakdowns and the schema size.
    ///
    /// # Returns
    /// - `Ok(DatabaseStats)` - Statistics; absent tables and non-MySQL sizes are `None`
    /// - `Err(AppError::DbErr)` - Database error other than a missing table
    pub async fn get_stats(&self) -> Result<DatabaseStats, AppError> {
        let database_repo = DatabaseRepository::new(self.db);

        let tables = database_repo.count_tables().await?;
        let airline_types = AirlineRepository::new(self.db).count_by_type().await?;
        let airport_sizes = GameRepository::new(self.db).count_airports_by_size().await?;
        let size_bytes = database_repo.schema_size_bytes().await?;

        Ok(DatabaseStats {
            tables,
            airline_types,
            airport_sizes,
            size_bytes,
        })
    }
}
