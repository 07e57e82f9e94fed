//! Table-level statistics about the game database.

use sea_orm::{
    DatabaseConnection, DbBackend, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, Statement,
};

use crate::server::util::schema::is_missing_table;

const SCHEMA_SIZE_QUERY: &str = "SELECT CAST(COALESCE(SUM(data_length + index_length), 0) AS SIGNED) AS size_bytes \
     FROM information_schema.tables WHERE table_schema = DATABASE()";

#[derive(Debug, FromQueryResult)]
struct SchemaSize {
    size_bytes: Option<i64>,
}

pub struct DatabaseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DatabaseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts rows in every table the dashboard knows about.
    ///
    /// # Returns
    /// - `Ok(Vec<(String, Option<u64>)>)` - `(table, rows)` pairs in a fixed order;
    ///   `None` rows mean the table does not exist in this deployment
    /// - `Err(DbErr)` - Database error other than a missing table
    pub async fn count_tables(&self) -> Result<Vec<(String, Option<u64>)>, DbErr> {
        Ok(vec![
            self.count_table(entity::prelude::User).await?,
            self.count_table(entity::prelude::UserAirline).await?,
            self.count_table(entity::prelude::UserIp).await?,
            self.count_table(entity::prelude::UserModifier).await?,
            self.count_table(entity::prelude::UserUuid).await?,
            self.count_table(entity::prelude::Airline).await?,
            self.count_table(entity::prelude::AirlineInfo).await?,
            self.count_table(entity::prelude::AirlineBase).await?,
            self.count_table(entity::prelude::Airport).await?,
            self.count_table(entity::prelude::Link).await?,
            self.count_table(entity::prelude::LinkConsumption).await?,
            self.count_table(entity::prelude::AirplaneModel).await?,
            self.count_table(entity::prelude::Airplane).await?,
            self.count_table(entity::prelude::Log).await?,
        ])
    }

    async fn count_table<E>(&self, entity: E) -> Result<(String, Option<u64>), DbErr>
    where
        E: EntityTrait,
        E::Model: Sync + 'static,
    {
        let table = entity.table_name().to_string();

        match E::find().count(self.db).await {
            Ok(rows) => Ok((table, Some(rows))),
            Err(err) if is_missing_table(&err) => Ok((table, None)),
            Err(err) => Err(err),
        }
    }

    /// Gets the on-disk size of the current schema in bytes.
    ///
    /// # Returns
    /// - `Ok(Some(bytes))` - Data plus index size reported by MySQL
    /// - `Ok(None)` - The backend does not expose schema sizes
    /// - `Err(DbErr)` - Database error during the information schema query
    pub async fn schema_size_bytes(&self) -> Result<Option<i64>, DbErr> {
        if self.db.get_database_backend() != DbBackend::MySql {
            return Ok(None);
        }

        let size = SchemaSize::find_by_statement(Statement::from_string(
            DbBackend::MySql,
            SCHEMA_SIZE_QUERY,
        ))
        .one(self.db)
        .await?;

        Ok(size.and_then(|s| s.size_bytes))
    }
}
