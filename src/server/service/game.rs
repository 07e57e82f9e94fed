use sea_orm::DatabaseConnection;

use crate::server::{
    data::game::GameRepository,
    error::AppError,
    model::game::{GameActivity, RECENT_CYCLES},
};

pub struct GameService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GameService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Summarizes the last `RECENT_CYCLES` cycles and the game-wide object counts.
    ///
    /// # Returns
    /// - `Ok(GameActivity)` - Current cycle (`None` before the first cycle) and per-cycle totals
    /// - `Err(AppError::DbErr)` - Database error during any of the queries
    pub async fn get_activity(&self) -> Result<GameActivity, AppError> {
        let game_repo = GameRepository::new(self.db);

        let current_cycle = game_repo.latest_cycle().await?;
        let cycles = match current_cycle {
            Some(cycle) => game_repo.get_cycle_totals(cycle - RECENT_CYCLES + 1).await?,
            None => Vec::new(),
        };

        Ok(GameActivity {
            current_cycle,
            cycles,
            total_links: game_repo.count_links().await?,
            total_airplanes: game_repo.count_airplanes().await?,
            total_bases: game_repo.count_bases().await?,
        })
    }
}
