use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AirportRefDto {
    pub id: i32,
    pub iata: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotRouteDto {
    pub link_id: i32,
    pub from_airport: AirportRefDto,
    pub to_airport: AirportRefDto,
    pub distance: i32,
    pub frequency: i32,
    pub capacity: i32,
    pub sold_seats: i32,
    /// Sold seats over capacity as a percentage, 0 for zero capacity.
    pub load_factor: f64,
    /// Consumption cycle the seat figures come from, `null` if never flown.
    pub cycle: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct FleetModelDto {
    pub model_id: i32,
    pub model: String,
    pub count: u64,
    pub capacity: i32,
    pub average_condition: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotDto {
    pub id: i32,
    pub name: String,
    pub balance: i64,
    pub reputation: f64,
    pub service_quality: f64,
    pub personality: String,
    pub route_count: u64,
    pub aircraft_count: u64,
    pub base_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<BotRouteDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet: Option<Vec<FleetModelDto>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotsDto {
    pub bots: Vec<BotDto>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotRoutesDto {
    pub airline_id: i32,
    pub airline_name: String,
    pub routes: Vec<BotRouteDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotAircraftDto {
    pub airline_id: i32,
    pub airline_name: String,
    pub total_aircraft: u64,
    pub fleet: Vec<FleetModelDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PersonalityCountDto {
    pub personality: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BotSummaryDto {
    pub total_bots: u64,
    pub personality_distribution: Vec<PersonalityCountDto>,
    pub total_routes: u64,
    pub total_aircraft: u64,
    pub total_bases: u64,
    pub average_balance: f64,
    pub average_reputation: f64,
    pub average_service_quality: f64,
}
