//! Bot airline repository.
//!
//! Bot airlines are airlines of type [`BOT_AIRLINE_TYPE`]. This repository loads them
//! together with their financial row, route network, fleet and base counts.

use std::collections::{BTreeMap, HashMap};

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::bot::{
    fleet_composition, AirportRef, Bot, BotRoute, FleetModel, BOT_AIRLINE_TYPE,
};

pub struct BotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every bot airline ordered by id.
    ///
    /// # Returns
    /// - `Ok(Vec<Bot>)` - Bots with balance, reputation and service quality
    /// - `Err(DbErr)` - Database error during airline or info lookup
    pub async fn get_all(&self) -> Result<Vec<Bot>, DbErr> {
        let airlines = entity::prelude::Airline::find()
            .filter(entity::airline::Column::AirlineType.eq(BOT_AIRLINE_TYPE))
            .order_by_asc(entity::airline::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = airlines.iter().map(|a| a.id).collect();
        let mut infos: HashMap<i32, entity::airline_info::Model> = if ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::AirlineInfo::find()
                .filter(entity::airline_info::Column::Airline.is_in(ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|info| (info.airline, info))
                .collect()
        };

        Ok(airlines
            .into_iter()
            .map(|airline| {
                let info = infos.remove(&airline.id);
                Bot::from_entity(airline, info)
            })
            .collect())
    }

    /// Finds a bot airline by id.
    ///
    /// # Returns
    /// - `Ok(Some(Bot))` - The airline exists and is a bot
    /// - `Ok(None)` - No airline with that id, or the airline belongs to a player
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, airline_id: i32) -> Result<Option<Bot>, DbErr> {
        let Some(airline) = entity::prelude::Airline::find_by_id(airline_id)
            .filter(entity::airline::Column::AirlineType.eq(BOT_AIRLINE_TYPE))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let info = entity::prelude::AirlineInfo::find_by_id(airline_id)
            .one(self.db)
            .await?;

        Ok(Some(Bot::from_entity(airline, info)))
    }

    /// Counts links per airline for the given airlines.
    pub async fn count_routes(&self, airline_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Link::find()
            .select_only()
            .column(entity::link::Column::Airline)
            .column_as(entity::link::Column::Id.count(), "count")
            .filter(entity::link::Column::Airline.is_in(airline_ids.iter().copied()))
            .group_by(entity::link::Column::Airline)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(into_count_map(rows))
    }

    /// Counts airplanes per owner for the given airlines.
    pub async fn count_aircraft(&self, airline_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::Airplane::find()
            .select_only()
            .column(entity::airplane::Column::Owner)
            .column_as(entity::airplane::Column::Id.count(), "count")
            .filter(entity::airplane::Column::Owner.is_in(airline_ids.iter().copied()))
            .group_by(entity::airplane::Column::Owner)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(into_count_map(rows))
    }

    /// Counts bases per airline for the given airlines.
    pub async fn count_bases(&self, airline_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::AirlineBase::find()
            .select_only()
            .column(entity::airline_base::Column::Airline)
            .column_as(entity::airline_base::Column::Airport.count(), "count")
            .filter(entity::airline_base::Column::Airline.is_in(airline_ids.iter().copied()))
            .group_by(entity::airline_base::Column::Airline)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(into_count_map(rows))
    }

    /// Gets the routes of an airline with seat figures from its latest consumption cycle.
    ///
    /// The latest cycle is the most recent cycle with any consumption for this airline.
    /// Links not flown in that cycle report zero sold seats and no cycle.
    ///
    /// # Arguments
    /// - `airline_id` - Airline whose links to load
    ///
    /// # Returns
    /// - `Ok(Vec<BotRoute>)` - Routes ordered by link id
    /// - `Err(DbErr)` - Database error during link, consumption or airport lookup
    pub async fn get_routes(&self, airline_id: i32) -> Result<Vec<BotRoute>, DbErr> {
        let mut routes = self.get_routes_for(&[airline_id]).await?;

        Ok(routes.remove(&airline_id).unwrap_or_default())
    }

    /// Gets the routes of several airlines in a fixed number of queries.
    ///
    /// Each airline's seat figures come from its own latest consumption cycle, as in
    /// [`Self::get_routes`].
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<BotRoute>>)` - Routes per airline ordered by link id; airlines
    ///   without links are absent
    /// - `Err(DbErr)` - Database error during link, consumption or airport lookup
    pub async fn get_routes_for(
        &self,
        airline_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<BotRoute>>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let links = entity::prelude::Link::find()
            .filter(entity::link::Column::Airline.is_in(airline_ids.iter().copied()))
            .order_by_asc(entity::link::Column::Id)
            .all(self.db)
            .await?;

        if links.is_empty() {
            return Ok(HashMap::new());
        }

        let latest_cycles = entity::prelude::LinkConsumption::find()
            .select_only()
            .column(entity::link_consumption::Column::Airline)
            .column_as(entity::link_consumption::Column::Cycle.max(), "cycle")
            .filter(entity::link_consumption::Column::Airline.is_in(airline_ids.iter().copied()))
            .group_by(entity::link_consumption::Column::Airline)
            .into_tuple::<(i32, i32)>()
            .all(self.db)
            .await?;

        let consumption: HashMap<i32, entity::link_consumption::Model> = if latest_cycles
            .is_empty()
        {
            HashMap::new()
        } else {
            let latest = latest_cycles
                .into_iter()
                .fold(Condition::any(), |cond, (airline, cycle)| {
                    cond.add(
                        Condition::all()
                            .add(entity::link_consumption::Column::Airline.eq(airline))
                            .add(entity::link_consumption::Column::Cycle.eq(cycle)),
                    )
                });

            entity::prelude::LinkConsumption::find()
                .filter(latest)
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.link, c))
                .collect()
        };

        let airport_ids: Vec<i32> = links
            .iter()
            .flat_map(|l| [l.from_airport, l.to_airport])
            .collect();
        let airports: HashMap<i32, AirportRef> = entity::prelude::Airport::find()
            .filter(entity::airport::Column::Id.is_in(airport_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, AirportRef::from_entity(a)))
            .collect();

        let resolve = |id: i32| {
            airports
                .get(&id)
                .cloned()
                .unwrap_or_else(|| AirportRef::unknown(id))
        };

        let mut routes: HashMap<i32, Vec<BotRoute>> = HashMap::new();
        for link in links {
            let flown = consumption.get(&link.id);

            routes.entry(link.airline).or_default().push(BotRoute {
                link_id: link.id,
                from_airport: resolve(link.from_airport),
                to_airport: resolve(link.to_airport),
                distance: link.distance,
                frequency: link.frequency,
                capacity: flown.map(|c| c.capacity).unwrap_or(link.capacity),
                sold_seats: flown.map(|c| c.sold_seats).unwrap_or(0),
                cycle: flown.map(|c| c.cycle),
            });
        }

        Ok(routes)
    }

    /// Gets the fleet composition of an airline grouped by airplane model.
    pub async fn get_fleet(&self, airline_id: i32) -> Result<Vec<FleetModel>, DbErr> {
        let mut fleets = self.get_fleets_for(&[airline_id]).await?;

        Ok(fleets.remove(&airline_id).unwrap_or_default())
    }

    /// Gets the fleet composition of several airlines in two queries.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, Vec<FleetModel>>)` - Fleet per owner; airlines without airplanes
    ///   are absent
    /// - `Err(DbErr)` - Database error during airplane or model lookup
    pub async fn get_fleets_for(
        &self,
        airline_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<FleetModel>>, DbErr> {
        if airline_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let airplanes = entity::prelude::Airplane::find()
            .filter(entity::airplane::Column::Owner.is_in(airline_ids.iter().copied()))
            .all(self.db)
            .await?;

        if airplanes.is_empty() {
            return Ok(HashMap::new());
        }

        let model_ids: Vec<i32> = airplanes.iter().map(|a| a.model).collect();
        let models: BTreeMap<i32, entity::airplane_model::Model> =
            entity::prelude::AirplaneModel::find()
                .filter(entity::airplane_model::Column::Id.is_in(model_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|m| (m.id, m))
                .collect();

        let mut by_owner: HashMap<i32, Vec<entity::airplane::Model>> = HashMap::new();
        for airplane in airplanes {
            by_owner.entry(airplane.owner).or_default().push(airplane);
        }

        Ok(by_owner
            .into_iter()
            .map(|(owner, airplanes)| (owner, fleet_composition(&airplanes, &models)))
            .collect())
    }
}

fn into_count_map(rows: Vec<(i32, i64)>) -> HashMap<i32, u64> {
    rows.into_iter()
        .map(|(id, count)| (id, count.max(0) as u64))
        .collect()
}
