use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, game::GameActivityDto},
    server::{error::AppError, service::game::GameService, state::AppState},
};

/// Tag for grouping game simulation endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get passenger, capacity and revenue totals for the last 10 cycles.
///
/// # Returns
/// - `200 OK` - Current cycle, per-cycle totals and game-wide counts
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/game/activity",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "Recent game activity", body = GameActivityDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_activity(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let activity = GameService::new(&state.db).get_activity().await?;

    Ok((StatusCode::OK, Json(activity.into_dto())))
}
