use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CycleActivityDto {
    pub cycle: i32,
    pub passengers: i64,
    pub capacity: i64,
    pub revenue: i64,
    pub load_factor: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GameActivityDto {
    pub current_cycle: Option<i32>,
    /// Newest cycle first.
    pub cycles: Vec<CycleActivityDto>,
    pub total_links: u64,
    pub total_airplanes: u64,
    pub total_bases: u64,
}
