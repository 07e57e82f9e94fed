//! Bot airline domain models.
//!
//! Bots are non-player airlines. The dashboard reports their finances, the personality
//! derived from them, and optionally their route network and fleet.

use std::collections::BTreeMap;

use crate::{
    model::bot::{
        AirportRefDto, BotAircraftDto, BotDto, BotRouteDto, BotRoutesDto, BotSummaryDto,
        FleetModelDto, PersonalityCountDto,
    },
    server::model::personality::Personality,
};

/// Airline type the game assigns to computer-controlled airlines.
pub const BOT_AIRLINE_TYPE: i32 = 2;

/// Sold seats over capacity as a percentage rounded to one decimal.
///
/// Zero (or negative) capacity yields 0 rather than dividing by zero.
pub fn load_factor(sold_seats: i64, capacity: i64) -> f64 {
    if capacity <= 0 {
        return 0.0;
    }
    round1(sold_seats as f64 / capacity as f64 * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Bot airline with the financial figures that drive its personality.
#[derive(Debug, Clone, PartialEq)]
pub struct Bot {
    pub id: i32,
    pub name: String,
    pub balance: i64,
    pub reputation: f64,
    pub service_quality: f64,
}

impl Bot {
    /// Builds a bot from its airline row and optional info row.
    ///
    /// A missing info row is reported as zero balance, reputation and quality.
    pub fn from_entity(
        airline: entity::airline::Model,
        info: Option<entity::airline_info::Model>,
    ) -> Self {
        let (balance, reputation, service_quality) = info
            .map(|i| (i.balance, i.reputation, i.service_quality))
            .unwrap_or((0, 0.0, 0.0));

        Self {
            id: airline.id,
            name: airline.name,
            balance,
            reputation,
            service_quality,
        }
    }

    pub fn personality(&self) -> Personality {
        Personality::classify(self.balance, self.reputation, self.service_quality)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AirportRef {
    pub id: i32,
    pub iata: String,
    pub name: String,
}

impl AirportRef {
    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            iata: entity.iata,
            name: entity.name,
        }
    }

    /// Placeholder for a link whose airport row no longer exists.
    pub fn unknown(id: i32) -> Self {
        Self {
            id,
            iata: String::new(),
            name: "Unknown".to_string(),
        }
    }

    pub fn into_dto(self) -> AirportRefDto {
        AirportRefDto {
            id: self.id,
            iata: self.iata,
            name: self.name,
        }
    }
}

/// A bot route with seat figures from its latest consumption cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct BotRoute {
    pub link_id: i32,
    pub from_airport: AirportRef,
    pub to_airport: AirportRef,
    pub distance: i32,
    pub frequency: i32,
    pub capacity: i32,
    pub sold_seats: i32,
    /// Cycle the seat figures come from, `None` when the link was never flown.
    pub cycle: Option<i32>,
}

impl BotRoute {
    pub fn load_factor(&self) -> f64 {
        load_factor(self.sold_seats as i64, self.capacity as i64)
    }

    pub fn into_dto(self) -> BotRouteDto {
        let load_factor = self.load_factor();

        BotRouteDto {
            link_id: self.link_id,
            from_airport: self.from_airport.into_dto(),
            to_airport: self.to_airport.into_dto(),
            distance: self.distance,
            frequency: self.frequency,
            capacity: self.capacity,
            sold_seats: self.sold_seats,
            load_factor,
            cycle: self.cycle,
        }
    }
}

/// Number of airplanes of one model in a fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct FleetModel {
    pub model_id: i32,
    pub model: String,
    pub count: u64,
    pub capacity: i32,
    pub average_condition: f64,
}

impl FleetModel {
    pub fn into_dto(self) -> FleetModelDto {
        FleetModelDto {
            model_id: self.model_id,
            model: self.model,
            count: self.count,
            capacity: self.capacity,
            average_condition: self.average_condition,
        }
    }
}

/// Groups airplanes by model into fleet composition entries ordered by model id.
///
/// # Arguments
/// - `airplanes` - Airplanes of a single airline
/// - `models` - Airplane models keyed by id; unknown models are reported as "Unknown"
pub fn fleet_composition(
    airplanes: &[entity::airplane::Model],
    models: &BTreeMap<i32, entity::airplane_model::Model>,
) -> Vec<FleetModel> {
    let mut grouped: BTreeMap<i32, (u64, f64)> = BTreeMap::new();
    for airplane in airplanes {
        let entry = grouped.entry(airplane.model).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += airplane.condition;
    }

    grouped
        .into_iter()
        .map(|(model_id, (count, condition_sum))| {
            let (model, capacity) = models
                .get(&model_id)
                .map(|m| (m.name.clone(), m.capacity))
                .unwrap_or_else(|| ("Unknown".to_string(), 0));

            FleetModel {
                model_id,
                model,
                count,
                capacity,
                average_condition: round1(condition_sum / count as f64),
            }
        })
        .collect()
}

/// Bot with aggregate counts and optional route and fleet expansions.
#[derive(Debug, Clone, PartialEq)]
pub struct BotOverview {
    pub bot: Bot,
    pub route_count: u64,
    pub aircraft_count: u64,
    pub base_count: u64,
    pub routes: Option<Vec<BotRoute>>,
    pub fleet: Option<Vec<FleetModel>>,
}

impl BotOverview {
    pub fn into_dto(self) -> BotDto {
        let personality = self.bot.personality().as_str().to_string();

        BotDto {
            id: self.bot.id,
            name: self.bot.name,
            balance: self.bot.balance,
            reputation: self.bot.reputation,
            service_quality: self.bot.service_quality,
            personality,
            route_count: self.route_count,
            aircraft_count: self.aircraft_count,
            base_count: self.base_count,
            routes: self
                .routes
                .map(|routes| routes.into_iter().map(|r| r.into_dto()).collect()),
            fleet: self
                .fleet
                .map(|fleet| fleet.into_iter().map(|f| f.into_dto()).collect()),
        }
    }
}

/// Parameters for listing bots.
#[derive(Debug, Clone, Default)]
pub struct GetBotsParam {
    /// Expand each bot's routes inline.
    pub include_routes: bool,
    /// Expand each bot's fleet composition inline.
    pub include_aircraft: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotRoutes {
    pub bot: Bot,
    pub routes: Vec<BotRoute>,
}

impl BotRoutes {
    pub fn into_dto(self) -> BotRoutesDto {
        BotRoutesDto {
            airline_id: self.bot.id,
            airline_name: self.bot.name,
            routes: self.routes.into_iter().map(|r| r.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BotFleet {
    pub bot: Bot,
    pub fleet: Vec<FleetModel>,
}

impl BotFleet {
    pub fn into_dto(self) -> BotAircraftDto {
        let total_aircraft = self.fleet.iter().map(|f| f.count).sum();

        BotAircraftDto {
            airline_id: self.bot.id,
            airline_name: self.bot.name,
            total_aircraft,
            fleet: self.fleet.into_iter().map(|f| f.into_dto()).collect(),
        }
    }
}

/// Aggregate figures across all bots.
#[derive(Debug, Clone, PartialEq)]
pub struct BotSummary {
    pub total_bots: u64,
    /// Count per personality, in `Personality::ALL` order with zero counts included.
    pub personality_distribution: Vec<(Personality, u64)>,
    pub total_routes: u64,
    pub total_aircraft: u64,
    pub total_bases: u64,
    pub average_balance: f64,
    pub average_reputation: f64,
    pub average_service_quality: f64,
}

impl BotSummary {
    /// Summarizes bot overviews. Averages are 0 when there are no bots.
    pub fn from_overviews(overviews: &[BotOverview]) -> Self {
        let total_bots = overviews.len() as u64;

        let mut counts: BTreeMap<Personality, u64> = BTreeMap::new();
        for overview in overviews {
            *counts.entry(overview.bot.personality()).or_default() += 1;
        }
        let personality_distribution = Personality::ALL
            .iter()
            .map(|p| (*p, counts.get(p).copied().unwrap_or(0)))
            .collect();

        let average = |f: fn(&Bot) -> f64| {
            if overviews.is_empty() {
                0.0
            } else {
                round1(overviews.iter().map(|o| f(&o.bot)).sum::<f64>() / overviews.len() as f64)
            }
        };

        Self {
            total_bots,
            personality_distribution,
            total_routes: overviews.iter().map(|o| o.route_count).sum(),
            total_aircraft: overviews.iter().map(|o| o.aircraft_count).sum(),
            total_bases: overviews.iter().map(|o| o.base_count).sum(),
            average_balance: average(|b| b.balance as f64),
            average_reputation: average(|b| b.reputation),
            average_service_quality: average(|b| b.service_quality),
        }
    }

    pub fn into_dto(self) -> BotSummaryDto {
        BotSummaryDto {
            total_bots: self.total_bots,
            personality_distribution: self
                .personality_distribution
                .into_iter()
                .map(|(personality, count)| PersonalityCountDto {
                    personality: personality.as_str().to_string(),
                    count,
                })
                .collect(),
            total_routes: self.total_routes,
            total_aircraft: self.total_aircraft,
            total_bases: self.total_bases,
            average_balance: self.average_balance,
            average_reputation: self.average_reputation,
            average_service_quality: self.average_service_quality,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(id: i32, balance: i64, reputation: f64, service_quality: f64) -> Bot {
        Bot {
            id,
            name: format!("Bot {}", id),
            balance,
            reputation,
            service_quality,
        }
    }

    fn overview(bot: Bot, routes: u64) -> BotOverview {
        BotOverview {
            bot,
            route_count: routes,
            aircraft_count: routes * 2,
            base_count: 1,
            routes: None,
            fleet: None,
        }
    }

    #[test]
    fn load_factor_is_zero_for_zero_capacity() {
        assert_eq!(load_factor(0, 0), 0.0);
        assert_eq!(load_factor(120, 0), 0.0);
    }

    #[test]
    fn load_factor_is_a_rounded_percentage() {
        assert_eq!(load_factor(750, 1000), 75.0);
        assert_eq!(load_factor(1, 3), 33.3);
        assert_eq!(load_factor(1000, 1000), 100.0);
    }

    #[test]
    fn fleet_composition_groups_by_model() {
        let models = BTreeMap::from([(
            1,
            entity::airplane_model::Model {
                id: 1,
                name: "A320".to_string(),
                capacity: 180,
            },
        )]);
        let airplanes = vec![
            entity::airplane::Model {
                id: 1,
                owner: 9,
                model: 1,
                constructed_cycle: 1,
                condition: 100.0,
            },
            entity::airplane::Model {
                id: 2,
                owner: 9,
                model: 1,
                constructed_cycle: 1,
                condition: 80.0,
            },
            entity::airplane::Model {
                id: 3,
                owner: 9,
                model: 4,
                constructed_cycle: 1,
                condition: 50.0,
            },
        ];

        let fleet = fleet_composition(&airplanes, &models);

        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].model, "A320");
        assert_eq!(fleet[0].count, 2);
        assert_eq!(fleet[0].capacity, 180);
        assert_eq!(fleet[0].average_condition, 90.0);
        assert_eq!(fleet[1].model, "Unknown");
        assert_eq!(fleet[1].count, 1);
    }

    #[test]
    fn summary_includes_every_personality() {
        let overviews = vec![
            overview(bot(1, 100_000_000, 50.0, 90.0), 3),
            overview(bot(2, 100_000_000, 50.0, 80.0), 1),
            overview(bot(3, 100_000_000, 50.0, 10.0), 2),
        ];

        let summary = BotSummary::from_overviews(&overviews);

        assert_eq!(summary.total_bots, 3);
        assert_eq!(summary.total_routes, 6);
        assert_eq!(summary.total_aircraft, 12);
        assert_eq!(summary.total_bases, 3);
        assert_eq!(summary.personality_distribution.len(), 6);
        let premium = summary
            .personality_distribution
            .iter()
            .find(|(p, _)| *p == Personality::Premium)
            .map(|(_, c)| *c);
        assert_eq!(premium, Some(2));
        let aggressive = summary
            .personality_distribution
            .iter()
            .find(|(p, _)| *p == Personality::Aggressive)
            .map(|(_, c)| *c);
        assert_eq!(aggressive, Some(0));
        assert_eq!(summary.average_service_quality, 60.0);
    }

    #[test]
    fn summary_of_no_bots_has_zero_averages() {
        let summary = BotSummary::from_overviews(&[]);

        assert_eq!(summary.total_bots, 0);
        assert_eq!(summary.average_balance, 0.0);
        assert!(summary.personality_distribution.iter().all(|(_, c)| *c == 0));
    }
}
