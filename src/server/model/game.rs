//! Per-cycle game activity totals.

use crate::{
    model::game::{CycleActivityDto, GameActivityDto},
    server::model::bot::load_factor,
};

/// Number of most recent cycles reported by the game activity endpoint.
pub const RECENT_CYCLES: i32 = 10;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CycleActivity {
    pub cycle: i32,
    pub passengers: i64,
    pub capacity: i64,
    pub revenue: i64,
}

impl CycleActivity {
    pub fn into_dto(self) -> CycleActivityDto {
        CycleActivityDto {
            cycle: self.cycle,
            passengers: self.passengers,
            capacity: self.capacity,
            revenue: self.revenue,
            load_factor: load_factor(self.passengers, self.capacity),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameActivity {
    pub current_cycle: Option<i32>,
    pub cycles: Vec<CycleActivity>,
    pub total_links: u64,
    pub total_airplanes: u64,
    pub total_bases: u64,
}

impl GameActivity {
    pub fn into_dto(self) -> GameActivityDto {
        GameActivityDto {
            current_cycle: self.current_cycle,
            cycles: self.cycles.into_iter().map(|c| c.into_dto()).collect(),
            total_links: self.total_links,
            total_airplanes: self.total_airplanes,
            total_bases: self.total_bases,
        }
    }
}
