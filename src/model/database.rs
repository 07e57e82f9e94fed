use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TableCountDto {
    pub table: String,
    /// `null` when the table does not exist in this deployment.
    pub rows: Option<u64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirlineTypeCountDto {
    pub airline_type: i32,
    pub count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirportSizeCountDto {
    pub size: i32,
    pub count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DatabaseStatsDto {
    pub tables: Vec<TableCountDto>,
    pub total_airlines: u64,
    pub player_airlines: u64,
    pub bot_airlines: u64,
    pub airline_types: Vec<AirlineTypeCountDto>,
    pub airport_sizes: Vec<AirportSizeCountDto>,
    pub database_size_mb: Option<f64>,
}
