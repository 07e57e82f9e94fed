//! Route table and OpenAPI document.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        activity::{ActivityDayDto, ActivityDto},
        api::ErrorDto,
        bot::{
            AirportRefDto, BotAircraftDto, BotDto, BotRouteDto, BotRoutesDto, BotSummaryDto,
            BotsDto, FleetModelDto, PersonalityCountDto,
        },
        container::{ContainerDto, ContainersDto},
        database::{AirlineTypeCountDto, AirportSizeCountDto, DatabaseStatsDto, TableCountDto},
        game::{CycleActivityDto, GameActivityDto},
        log::{LogEntryDto, RecentLogsDto},
        resource::{
            AlertDto, AlertsDto, CpuDto, DiskDto, LoadAverageDto, MemoryDto, NetworkDto,
            ServerResourcesDto,
        },
        stats::{StatsDto, StatusCountDto, TopUserDto},
        user::{
            IpLookupDto, IpUserDto, PaginatedUsersDto, UserDetailDto, UserIpDto, UserListItemDto,
            UserModifierDto, UserProfileDto, UserUuidDto,
        },
    },
    server::{
        controller::{activity, bot, database, game, log, stats, system, user},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Airline Admin API",
        description = "Read-only reporting endpoints for the airline game administrators"
    ),
    paths(
        stats::get_stats,
        user::get_users,
        user::get_user,
        user::get_ip_users,
        activity::get_activity,
        system::get_resources,
        system::get_alerts,
        system::get_containers,
        database::get_database_stats,
        game::get_game_activity,
        log::get_recent_logs,
        bot::get_bots,
        bot::get_bot_routes,
        bot::get_bot_aircraft,
        bot::get_bot_summary,
    ),
    components(schemas(
        ErrorDto,
        StatsDto,
        StatusCountDto,
        TopUserDto,
        PaginatedUsersDto,
        UserListItemDto,
        UserDetailDto,
        UserProfileDto,
        UserIpDto,
        UserModifierDto,
        UserUuidDto,
        IpLookupDto,
        IpUserDto,
        ActivityDto,
        ActivityDayDto,
        ServerResourcesDto,
        CpuDto,
        LoadAverageDto,
        MemoryDto,
        DiskDto,
        NetworkDto,
        AlertsDto,
        AlertDto,
        ContainersDto,
        ContainerDto,
        DatabaseStatsDto,
        TableCountDto,
        AirlineTypeCountDto,
        AirportSizeCountDto,
        GameActivityDto,
        CycleActivityDto,
        RecentLogsDto,
        LogEntryDto,
        BotsDto,
        BotDto,
        BotRouteDto,
        BotRoutesDto,
        BotAircraftDto,
        FleetModelDto,
        AirportRefDto,
        BotSummaryDto,
        PersonalityCountDto,
    )),
    tags(
        (name = "stats", description = "Dashboard overview"),
        (name = "user", description = "User listing, details and IP lookup"),
        (name = "activity", description = "Daily active users"),
        (name = "system", description = "Host resources, alerts and containers"),
        (name = "database", description = "Database statistics"),
        (name = "game", description = "Game simulation activity"),
        (name = "log", description = "Game logs"),
        (name = "bot", description = "Bot airlines"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/stats", get(stats::get_stats))
        .route("/api/users", get(user::get_users))
        .route("/api/users/{user_id}", get(user::get_user))
        .route("/api/ip/{ip}", get(user::get_ip_users))
        .route("/api/activity", get(activity::get_activity))
        .route("/api/server/resources", get(system::get_resources))
        .route("/api/alerts", get(system::get_alerts))
        .route("/api/containers", get(system::get_containers))
        .route("/api/database/stats", get(database::get_database_stats))
        .route("/api/game/activity", get(game::get_game_activity))
        .route("/api/logs/recent", get(log::get_recent_logs))
        .route("/api/bots", get(bot::get_bots))
        .route("/api/bots/summary", get(bot::get_bot_summary))
        .route("/api/bots/{bot_id}/routes", get(bot::get_bot_routes))
        .route("/api/bots/{bot_id}/aircraft", get(bot::get_bot_aircraft))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
