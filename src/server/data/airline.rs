//! Airline data repository.
//!
//! Resolves airline ownership and names for the user and log views, and counts airlines
//! by type for the database overview.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::AirlineRef;

pub struct AirlineRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirlineRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the airlines owned by each of the given users.
    ///
    /// # Arguments
    /// - `user_names` - Names of the users to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<String, Vec<AirlineRef>>)` - Airlines per user name ordered by airline id;
    ///   users without airlines have no entry
    /// - `Err(DbErr)` - Database error during ownership or airline lookup
    pub async fn get_owned_by(
        &self,
        user_names: &[String],
    ) -> Result<HashMap<String, Vec<AirlineRef>>, DbErr> {
        if user_names.is_empty() {
            return Ok(HashMap::new());
        }

        let ownership = entity::prelude::UserAirline::find()
            .filter(entity::user_airline::Column::UserName.is_in(user_names.iter().cloned()))
            .order_by_asc(entity::user_airline::Column::Airline)
            .all(self.db)
            .await?;

        let airline_ids: Vec<i32> = ownership.iter().map(|o| o.airline).collect();
        let names = self.get_names(&airline_ids).await?;

        let mut owned: HashMap<String, Vec<AirlineRef>> = HashMap::new();
        for row in ownership {
            // Ownership rows can outlive a deleted airline
            let Some(name) = names.get(&row.airline) else {
                continue;
            };
            owned.entry(row.user_name).or_default().push(AirlineRef {
                id: row.airline,
                name: name.clone(),
            });
        }

        Ok(owned)
    }

    /// Gets airline names keyed by airline id.
    ///
    /// Ids with no matching airline are absent from the returned map.
    pub async fn get_names(&self, airline_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Airline::find()
            .select_only()
            .column(entity::airline::Column::Id)
            .column(entity::airline::Column::Name)
            .filter(entity::airline::Column::Id.is_in(airline_ids.iter().copied()))
            .into_tuple::<(i32, String)>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Counts airlines per airline type.
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, i64)>)` - `(airline_type, count)` pairs ordered by type
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn count_by_type(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Airline::find()
            .select_only()
            .column(entity::airline::Column::AirlineType)
            .column_as(entity::airline::Column::Id.count(), "count")
            .group_by(entity::airline::Column::AirlineType)
            .order_by_asc(entity::airline::Column::AirlineType)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }
}
