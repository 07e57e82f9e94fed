use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{activity::ActivityDto, api::ErrorDto},
    server::{
        controller::param::{ActivityQuery, ApiQuery},
        error::AppError,
        model::activity::{clamp_days, into_dto},
        service::activity::ActivityService,
        state::AppState,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// Get daily active user counts.
///
/// Counts users per calendar date of their last activity within the window, newest date
/// first.
///
/// # Returns
/// - `200 OK` - Daily activity buckets
/// - `400 Bad Request` - Non-numeric `days`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/activity",
    tag = ACTIVITY_TAG,
    params(ActivityQuery),
    responses(
        (status = 200, description = "Daily active users", body = ActivityDto),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ActivityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let days = clamp_days(query.days);
    let activity = ActivityService::new(&state.db).get_activity(days).await?;

    Ok((StatusCode::OK, Json(into_dto(activity))))
}
