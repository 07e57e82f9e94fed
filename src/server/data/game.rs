//! Game-wide counters and link consumption history.

use sea_orm::{
    sea_query::{Func, SimpleExpr},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::game::CycleActivity;

pub struct GameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn count_links(&self) -> Result<u64, DbErr> {
        entity::prelude::Link::find().count(self.db).await
    }

    pub async fn count_airplanes(&self) -> Result<u64, DbErr> {
        entity::prelude::Airplane::find().count(self.db).await
    }

    pub async fn count_bases(&self) -> Result<u64, DbErr> {
        entity::prelude::AirlineBase::find().count(self.db).await
    }

    /// Counts airports per airport size.
    ///
    /// # Returns
    /// - `Ok(Vec<(i32, i64)>)` - `(size, count)` pairs ordered by size
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn count_airports_by_size(&self) -> Result<Vec<(i32, i64)>, DbErr> {
        entity::prelude::Airport::find()
            .select_only()
            .column(entity::airport::Column::Size)
            .column_as(entity::airport::Column::Id.count(), "count")
            .group_by(entity::airport::Column::Size)
            .order_by_asc(entity::airport::Column::Size)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await
    }

    /// Gets the most recent cycle with recorded link consumption.
    ///
    /// # Returns
    /// - `Ok(Some(cycle))` - Latest simulated cycle
    /// - `Ok(None)` - No consumption has been recorded yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn latest_cycle(&self) -> Result<Option<i32>, DbErr> {
        let cycle = entity::prelude::LinkConsumption::find()
            .select_only()
            .column_as(entity::link_consumption::Column::Cycle.max(), "cycle")
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?;

        Ok(cycle.flatten())
    }

    /// Sums link consumption per cycle for every cycle at or after `first_cycle`.
    ///
    /// Sums are cast to a signed integer so MySQL returns `BIGINT` rather than `DECIMAL`.
    ///
    /// # Returns
    /// - `Ok(Vec<CycleActivity>)` - One total per cycle, newest cycle first
    /// - `Err(DbErr)` - Database error during the grouped query
    pub async fn get_cycle_totals(&self, first_cycle: i32) -> Result<Vec<CycleActivity>, DbErr> {
        use entity::link_consumption::Column;

        let totals = entity::prelude::LinkConsumption::find()
            .select_only()
            .column(Column::Cycle)
            .column_as(signed_sum(Column::SoldSeats), "passengers")
            .column_as(signed_sum(Column::Capacity), "capacity")
            .column_as(signed_sum(Column::Revenue), "revenue")
            .filter(Column::Cycle.gte(first_cycle))
            .group_by(Column::Cycle)
            .order_by_desc(Column::Cycle)
            .into_tuple::<(i32, i64, i64, i64)>()
            .all(self.db)
            .await?;

        Ok(totals
            .into_iter()
            .map(|(cycle, passengers, capacity, revenue)| CycleActivity {
                cycle,
                passengers,
                capacity,
                revenue,
            })
            .collect())
    }
}

fn signed_sum(column: entity::link_consumption::Column) -> SimpleExpr {
    Func::cast_as(column.sum(), "SIGNED").into()
}
