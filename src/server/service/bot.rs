//! Bot airline service.
//!
//! Builds the bot overview, per-bot route and fleet views and the fleet-wide summary.
//! Requests for an airline that is not a bot are answered with `AppError::NotFound`.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::bot::BotRepository,
    error::AppError,
    model::bot::{Bot, BotFleet, BotOverview, BotRoutes, BotSummary, GetBotsParam},
};

const BOT_NOT_FOUND: &str = "Bot not found";

pub struct BotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every bot with its counts and, on request, routes and fleet.
    ///
    /// # Arguments
    /// - `param` - Which per-bot expansions to include
    ///
    /// # Returns
    /// - `Ok(Vec<BotOverview>)` - Bots ordered by id
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_all(&self, param: GetBotsParam) -> Result<Vec<BotOverview>, AppError> {
        let bot_repo = BotRepository::new(self.db);

        let bots = bot_repo.get_all().await?;
        let ids: Vec<i32> = bots.iter().map(|b| b.id).collect();
        let route_counts = bot_repo.count_routes(&ids).await?;
        let aircraft_counts = bot_repo.count_aircraft(&ids).await?;
        let base_counts = bot_repo.count_bases(&ids).await?;

        let mut routes = if param.include_routes {
            Some(bot_repo.get_routes_for(&ids).await?)
        } else {
            None
        };
        let mut fleets = if param.include_aircraft {
            Some(bot_repo.get_fleets_for(&ids).await?)
        } else {
            None
        };

        Ok(bots
            .into_iter()
            .map(|bot| BotOverview {
                route_count: route_counts.get(&bot.id).copied().unwrap_or(0),
                aircraft_count: aircraft_counts.get(&bot.id).copied().unwrap_or(0),
                base_count: base_counts.get(&bot.id).copied().unwrap_or(0),
                routes: routes
                    .as_mut()
                    .map(|r| r.remove(&bot.id).unwrap_or_default()),
                fleet: fleets
                    .as_mut()
                    .map(|f| f.remove(&bot.id).unwrap_or_default()),
                bot,
            })
            .collect())
    }

    /// Retrieves a bot's routes with load factors from its latest cycle.
    ///
    /// # Returns
    /// - `Ok(BotRoutes)` - The bot and its routes
    /// - `Err(AppError::NotFound)` - The id is unknown or belongs to a player airline
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_routes(&self, bot_id: i32) -> Result<BotRoutes, AppError> {
        let bot = self.require_bot(bot_id).await?;
        let routes = BotRepository::new(self.db).get_routes(bot_id).await?;

        Ok(BotRoutes { bot, routes })
    }

    /// Retrieves a bot's fleet composition grouped by airplane model.
    ///
    /// # Returns
    /// - `Ok(BotFleet)` - The bot and its fleet
    /// - `Err(AppError::NotFound)` - The id is unknown or belongs to a player airline
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_fleet(&self, bot_id: i32) -> Result<BotFleet, AppError> {
        let bot = self.require_bot(bot_id).await?;
        let fleet = BotRepository::new(self.db).get_fleet(bot_id).await?;

        Ok(BotFleet { bot, fleet })
    }

    /// Aggregates personality distribution, totals and averages over every bot.
    pub async fn get_summary(&self) -> Result<BotSummary, AppError> {
        let overviews = self.get_all(GetBotsParam::default()).await?;

        Ok(BotSummary::from_overviews(&overviews))
    }

    async fn require_bot(&self, bot_id: i32) -> Result<Bot, AppError> {
        BotRepository::new(self.db)
            .find_by_id(bot_id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOT_NOT_FOUND.to_string()))
    }
}
