//! Row counts and breakdowns across the game database.

use crate::model::database::{
    AirlineTypeCountDto, AirportSizeCountDto, DatabaseStatsDto, TableCountDto,
};
use crate::server::model::bot::{round1, BOT_AIRLINE_TYPE};

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseStats {
    /// `(table, rows)` pairs; `None` rows mean the table is absent.
    pub tables: Vec<(String, Option<u64>)>,
    /// `(airline_type, count)` pairs ordered by type.
    pub airline_types: Vec<(i32, i64)>,
    /// `(size, count)` pairs ordered by airport size.
    pub airport_sizes: Vec<(i32, i64)>,
    pub size_bytes: Option<i64>,
}

impl DatabaseStats {
    pub fn bot_airlines(&self) -> u64 {
        self.airline_types
            .iter()
            .filter(|(t, _)| *t == BOT_AIRLINE_TYPE)
            .map(|(_, c)| *c as u64)
            .sum()
    }

    pub fn total_airlines(&self) -> u64 {
        self.airline_types.iter().map(|(_, c)| *c as u64).sum()
    }

    pub fn into_dto(self) -> DatabaseStatsDto {
        let total_airlines = self.total_airlines();
        let bot_airlines = self.bot_airlines();

        DatabaseStatsDto {
            tables: self
                .tables
                .into_iter()
                .map(|(table, rows)| TableCountDto { table, rows })
                .collect(),
            total_airlines,
            player_airlines: total_airlines - bot_airlines,
            bot_airlines,
            airline_types: self
                .airline_types
                .into_iter()
                .map(|(airline_type, count)| AirlineTypeCountDto {
                    airline_type,
                    count,
                })
                .collect(),
            airport_sizes: self
                .airport_sizes
                .into_iter()
                .map(|(size, count)| AirportSizeCountDto { size, count })
                .collect(),
            database_size_mb: self
                .size_bytes
                .map(|bytes| round1(bytes as f64 / (1024.0 * 1024.0))),
        }
    }
}
