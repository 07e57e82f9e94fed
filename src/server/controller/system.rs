//! Host-level endpoints: resource usage, threshold alerts and container status.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        container::ContainersDto,
        resource::{AlertsDto, ServerResourcesDto},
    },
    server::{
        error::AppError,
        model::{alert, container},
        service::{alert::AlertService, container::ContainerService, resource::ResourceService},
        state::AppState,
    },
};

/// Tag for grouping host monitoring endpoints in OpenAPI documentation
pub static SYSTEM_TAG: &str = "system";

/// Get a snapshot of host resource usage.
///
/// Samples CPU, memory, swap, disks and network counters. Sampling takes roughly the
/// minimum CPU update interval because CPU usage needs two readings.
///
/// # Returns
/// - `200 OK` - Resource snapshot
/// - `500 Internal Server Error` - Sampling failed
#[utoipa::path(
    get,
    path = "/api/server/resources",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Host resource snapshot", body = ServerResourcesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_resources() -> Result<impl IntoResponse, AppError> {
    let snapshot = ResourceService::sample().await?;

    Ok((StatusCode::OK, Json(snapshot.into_dto())))
}

/// Get threshold alerts for host resources and the database.
///
/// Usage above 90% is CRITICAL and above 75% is WARNING. An unreachable database adds
/// a CRITICAL alert. When nothing is breached a single INFO alert is returned.
///
/// # Returns
/// - `200 OK` - Alerts
/// - `500 Internal Server Error` - Sampling failed
#[utoipa::path(
    get,
    path = "/api/alerts",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Threshold alerts", body = AlertsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_alerts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let (alerts, taken_at) = AlertService::new(&state.db).check().await?;

    Ok((StatusCode::OK, Json(alert::into_dto(alerts, taken_at))))
}

/// Get every container known to the container runtime.
///
/// # Returns
/// - `200 OK` - Containers as reported by `ps -a`
/// - `500 Internal Server Error` - Runtime missing, timed out or failed
#[utoipa::path(
    get,
    path = "/api/containers",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Container status", body = ContainersDto),
        (status = 500, description = "Container runtime unavailable or failed", body = ErrorDto)
    ),
)]
pub async fn get_containers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let runtime = &state.container_runtime;
    let containers = ContainerService::new(runtime).list().await?;

    Ok((
        StatusCode::OK,
        Json(container::into_dto(&runtime.program, containers)),
    ))
}
