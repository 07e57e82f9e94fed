use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, database::DatabaseStatsDto},
    server::{error::AppError, service::database::DatabaseService, state::AppState},
};

/// Tag for grouping database endpoints in OpenAPI documentation
pub static DATABASE_TAG: &str = "database";

/// Get row counts and breakdowns for the game database.
///
/// Tables missing from the deployment report `rows: null`. The schema size is only
/// available on MySQL.
///
/// # Returns
/// - `200 OK` - Database statistics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/database/stats",
    tag = DATABASE_TAG,
    responses(
        (status = 200, description = "Database statistics", body = DatabaseStatsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_database_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = DatabaseService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
