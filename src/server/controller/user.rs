use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{IpLookupDto, PaginatedUsersDto, UserDetailDto},
    },
    server::{
        controller::param::{ApiPath, ApiQuery, UserListQuery},
        error::AppError,
        model::user::GetUsersParam,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a paginated, searchable list of users.
///
/// Users are ordered by most recent activity. The search term is matched as a substring
/// against user name and email. Each row carries the comma-joined names of the user's
/// airlines.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Page (default 1), page size (default 50, max 500) and optional search
///
/// # Returns
/// - `200 OK` - Page of users with pagination metadata
/// - `400 Bad Request` - Non-numeric page or page size
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Malformed query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<UserListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let param = GetUsersParam::new(query.page, query.per_page, query.search);
    let users = UserService::new(&state.db).get_paginated(param).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get a user's profile with IPs, modifiers and client UUIDs.
///
/// Up to 20 IPs and 10 UUIDs are returned, most recently updated first.
///
/// # Returns
/// - `200 OK` - User details
/// - `400 Bad Request` - Non-numeric user id
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "Game user id")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetailDto),
        (status = 400, description = "Malformed user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = UserService::new(&state.db).get_details(user_id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Get every user seen from an IP address.
///
/// # Returns
/// - `200 OK` - Users most recently seen first; empty when the address is unknown
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/ip/{ip}",
    tag = USER_TAG,
    params(
        ("ip" = String, Path, description = "IP address, matched exactly")
    ),
    responses(
        (status = 200, description = "Users seen from the address", body = IpLookupDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ip_users(
    State(state): State<AppState>,
    ApiPath(ip): ApiPath<String>,
) -> Result<impl IntoResponse, AppError> {
    let lookup = UserService::new(&state.db).get_by_ip(ip).await?;

    Ok((StatusCode::OK, Json(lookup.into_dto())))
}
