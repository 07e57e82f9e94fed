use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, log::RecentLogsDto},
    server::{
        controller::param::{ApiQuery, LogQuery},
        error::AppError,
        model::log::clamp_limit,
        service::log::LogService,
        state::AppState,
    },
};

/// Tag for grouping game log endpoints in OpenAPI documentation
pub static LOG_TAG: &str = "log";

/// Get the newest game log entries.
///
/// A deployment without a log table answers with an empty list and a message rather
/// than an error.
///
/// # Returns
/// - `200 OK` - Log entries, newest first
/// - `400 Bad Request` - Non-numeric `limit`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/logs/recent",
    tag = LOG_TAG,
    params(LogQuery),
    responses(
        (status = 200, description = "Recent game log entries", body = RecentLogsDto),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_recent_logs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let logs = LogService::new(&state.db)
        .get_recent(clamp_limit(query.limit))
        .await?;

    Ok((StatusCode::OK, Json(logs.into_dto())))
}
