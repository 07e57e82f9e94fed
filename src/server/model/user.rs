//! User domain models and parameters.
//!
//! Provides domain models for game users as read from the `user` table together with the
//! tracking records (IPs, client UUIDs, modifiers) the admin dashboard inspects. Includes
//! parameter types for listing and searching users.

use chrono::NaiveDateTime;

use crate::model::{
    stats::{StatsDto, StatusCountDto, TopUserDto},
    user::{
        IpLookupDto, IpUserDto, PaginatedUsersDto, UserDetailDto, UserIpDto, UserListItemDto,
        UserModifierDto, UserProfileDto, UserUuidDto,
    },
};

/// Largest page size accepted by the user listing.
pub const MAX_PER_PAGE: u64 = 500;

/// Page size used when the caller does not provide one.
pub const DEFAULT_PER_PAGE: u64 = 50;

/// Game user with account status and activity timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub status: String,
    pub admin_status: Option<String>,
    pub level: i32,
    pub creation_time: Option<NaiveDateTime>,
    pub last_active: Option<NaiveDateTime>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            email: entity.email,
            status: entity.status,
            admin_status: entity.admin_status,
            level: entity.level,
            creation_time: entity.creation_time,
            last_active: entity.last_active,
        }
    }
}

/// Airline id and name pair owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct AirlineRef {
    pub id: i32,
    pub name: String,
}

/// Joins airline names with commas, `None` when the user owns no airline.
pub fn join_airline_names(airlines: &[AirlineRef]) -> Option<String> {
    if airlines.is_empty() {
        return None;
    }

    Some(
        airlines
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(","),
    )
}

fn join_airline_ids(airlines: &[AirlineRef]) -> Option<String> {
    if airlines.is_empty() {
        return None;
    }

    Some(
        airlines
            .iter()
            .map(|a| a.id.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}

/// User together with the airlines they own.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithAirlines {
    pub user: User,
    pub airlines: Vec<AirlineRef>,
}

impl UserWithAirlines {
    pub fn into_dto(self) -> UserListItemDto {
        let airlines = join_airline_names(&self.airlines);
        let user = self.user;

        UserListItemDto {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            status: user.status,
            admin_status: user.admin_status,
            level: user.level,
            creation_time: user.creation_time,
            last_active: user.last_active,
            airlines,
        }
    }

    pub fn into_profile_dto(self) -> UserProfileDto {
        let airline_ids = join_airline_ids(&self.airlines);
        let airline_names = join_airline_names(&self.airlines);
        let user = self.user;

        UserProfileDto {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            status: user.status,
            admin_status: user.admin_status,
            level: user.level,
            creation_time: user.creation_time,
            last_active: user.last_active,
            airline_ids,
            airline_names,
        }
    }
}

/// Paginated collection of users with metadata.
///
/// Contains a page of users along with pagination metadata for building
/// paginated user management interfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<UserWithAirlines>,
    /// Total number of users matching the search across all pages.
    pub total: u64,
    /// Current page number (one-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed to show `total` items at `per_page` items each.
pub fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Parameters for paginated, searchable user queries.
///
/// Values are normalized on construction: the page is at least 1 and the page size is
/// clamped to `1..=MAX_PER_PAGE`. A blank search term is treated as no search.
#[derive(Debug, Clone, PartialEq)]
pub struct GetUsersParam {
    /// One-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
    /// Substring matched against user name or email.
    pub search: Option<String>,
}

impl GetUsersParam {
    pub fn new(page: Option<i64>, per_page: Option<i64>, search: Option<String>) -> Self {
        let page = page.unwrap_or(1).max(1) as u64;
        let per_page = per_page
            .map(|p| p.clamp(1, MAX_PER_PAGE as i64) as u64)
            .unwrap_or(DEFAULT_PER_PAGE);
        let search = search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            page,
            per_page,
            search,
        }
    }

    /// Number of rows skipped before this page starts.
    ///
    /// Saturates at `i64::MAX`, the largest offset the SQL drivers bind, so a page far
    /// past the end yields an empty page.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.per_page)
            .min(i64::MAX as u64)
    }
}

/// IP address sighting recorded for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserIp {
    pub user_id: i32,
    pub ip: String,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
}

impl UserIp {
    pub fn from_entity(entity: entity::user_ip::Model) -> Self {
        Self {
            user_id: entity.user,
            ip: entity.ip,
            occurrence: entity.occurrence,
            last_update: entity.last_update,
        }
    }

    pub fn into_dto(self) -> UserIpDto {
        UserIpDto {
            ip: self.ip,
            occurrence: self.occurrence,
            last_update: self.last_update,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserModifier {
    pub modifier_name: String,
    /// Cycle the modifier was applied in.
    pub creation: i32,
}

impl UserModifier {
    pub fn from_entity(entity: entity::user_modifier::Model) -> Self {
        Self {
            modifier_name: entity.modifier_name,
            creation: entity.creation,
        }
    }

    pub fn into_dto(self) -> UserModifierDto {
        UserModifierDto {
            modifier_name: self.modifier_name,
            creation: self.creation,
        }
    }
}

/// Client installation UUID recorded for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserUuid {
    pub uuid: String,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
}

impl UserUuid {
    pub fn from_entity(entity: entity::user_uuid::Model) -> Self {
        Self {
            uuid: entity.uuid,
            occurrence: entity.occurrence,
            last_update: entity.last_update,
        }
    }

    pub fn into_dto(self) -> UserUuidDto {
        UserUuidDto {
            uuid: self.uuid,
            occurrence: self.occurrence,
            last_update: self.last_update,
        }
    }
}

/// Full user profile with tracking records.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetails {
    pub user: UserWithAirlines,
    pub ips: Vec<UserIp>,
    pub modifiers: Vec<UserModifier>,
    pub uuids: Vec<UserUuid>,
}

impl UserDetails {
    pub fn into_dto(self) -> UserDetailDto {
        UserDetailDto {
            user: self.user.into_profile_dto(),
            ips: self.ips.into_iter().map(|i| i.into_dto()).collect(),
            modifiers: self.modifiers.into_iter().map(|m| m.into_dto()).collect(),
            uuids: self.uuids.into_iter().map(|u| u.into_dto()).collect(),
        }
    }
}

/// A user seen from a particular IP address.
#[derive(Debug, Clone, PartialEq)]
pub struct IpUser {
    pub user: User,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
    pub airlines: Vec<AirlineRef>,
}

impl IpUser {
    pub fn into_dto(self) -> IpUserDto {
        let airlines = join_airline_names(&self.airlines);

        IpUserDto {
            id: self.user.id,
            user_name: self.user.user_name,
            email: self.user.email,
            status: self.user.status,
            level: self.user.level,
            occurrence: self.occurrence,
            last_update: self.last_update,
            airlines,
        }
    }
}

/// Users associated with an IP address, most recently seen first.
#[derive(Debug, Clone, PartialEq)]
pub struct IpLookup {
    pub ip: String,
    pub users: Vec<IpUser>,
}

impl IpLookup {
    pub fn into_dto(self) -> IpLookupDto {
        IpLookupDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            ip: self.ip,
        }
    }
}

/// Aggregate user counts shown on the dashboard front page.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub new_users: u64,
    /// `(status, count)` pairs ordered by status.
    pub status_breakdown: Vec<(String, i64)>,
    pub top_users: Vec<User>,
}

impl UserStats {
    pub fn into_dto(self) -> StatsDto {
        StatsDto {
            total_users: self.total_users,
            active_users: self.active_users,
            new_users: self.new_users,
            status_breakdown: self
                .status_breakdown
                .into_iter()
                .map(|(status, count)| StatusCountDto { status, count })
                .collect(),
            top_users: self
                .top_users
                .into_iter()
                .map(|u| TopUserDto {
                    user_name: u.user_name,
                    email: u.email,
                    level: u.level,
                    status: u.status,
                    last_active: u.last_active,
                })
                .collect(),
        }
    }
}
