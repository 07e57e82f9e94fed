use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        bot::{BotAircraftDto, BotRoutesDto, BotSummaryDto, BotsDto},
    },
    server::{
        controller::param::{ApiPath, ApiQuery, BotListQuery},
        error::AppError,
        model::bot::GetBotsParam,
        service::bot::BotService,
        state::AppState,
    },
};

/// Tag for grouping bot airline endpoints in OpenAPI documentation
pub static BOT_TAG: &str = "bot";

/// Get every bot airline with personality and counts.
///
/// Routes and fleet composition are expanded inline when requested.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - `include_routes` and `include_aircraft` flags
///
/// # Returns
/// - `200 OK` - Bots ordered by id
/// - `400 Bad Request` - Unrecognized flag value
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bots",
    tag = BOT_TAG,
    params(BotListQuery),
    responses(
        (status = 200, description = "Bot airlines", body = BotsDto),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bots(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BotListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetBotsParam {
        include_routes: query.include_routes,
        include_aircraft: query.include_aircraft,
    };
    let bots: Vec<_> = BotService::new(&state.db)
        .get_all(param)
        .await?
        .into_iter()
        .map(|b| b.into_dto())
        .collect();

    Ok((
        StatusCode::OK,
        Json(BotsDto {
            total: bots.len() as u64,
            bots,
        }),
    ))
}

/// Get a bot's routes with load factors from its latest cycle.
///
/// # Returns
/// - `200 OK` - Bot routes
/// - `400 Bad Request` - Non-numeric bot id
/// - `404 Not Found` - The id is unknown or not a bot airline
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bots/{bot_id}/routes",
    tag = BOT_TAG,
    params(
        ("bot_id" = i32, Path, description = "Bot airline id")
    ),
    responses(
        (status = 200, description = "Bot routes", body = BotRoutesDto),
        (status = 400, description = "Malformed bot id", body = ErrorDto),
        (status = 404, description = "Bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_routes(
    State(state): State<AppState>,
    ApiPath(bot_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let routes = BotService::new(&state.db).get_routes(bot_id).await?;

    Ok((StatusCode::OK, Json(routes.into_dto())))
}

/// Get a bot's fleet composition grouped by airplane model.
///
/// # Returns
/// - `200 OK` - Bot fleet
/// - `400 Bad Request` - Non-numeric bot id
/// - `404 Not Found` - The id is unknown or not a bot airline
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bots/{bot_id}/aircraft",
    tag = BOT_TAG,
    params(
        ("bot_id" = i32, Path, description = "Bot airline id")
    ),
    responses(
        (status = 200, description = "Bot fleet composition", body = BotAircraftDto),
        (status = 400, description = "Malformed bot id", body = ErrorDto),
        (status = 404, description = "Bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_aircraft(
    State(state): State<AppState>,
    ApiPath(bot_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let fleet = BotService::new(&state.db).get_fleet(bot_id).await?;

    Ok((StatusCode::OK, Json(fleet.into_dto())))
}

/// Get personality distribution, totals and averages across all bots.
///
/// # Returns
/// - `200 OK` - Bot summary
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bots/summary",
    tag = BOT_TAG,
    responses(
        (status = 200, description = "Bot summary", body = BotSummaryDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot_summary(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = BotService::new(&state.db).get_summary().await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
