use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, stats::StatsDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping dashboard overview endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get aggregate user statistics.
///
/// Returns the total user count, users active in the last 7 days, users created in the
/// last 30 days, a breakdown by account status and the 10 highest level users.
///
/// # Returns
/// - `200 OK` - User statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Aggregate user statistics", body = StatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = UserService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
