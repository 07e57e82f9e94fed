use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserListItemDto {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub status: String,
    pub admin_status: Option<String>,
    pub level: i32,
    pub creation_time: Option<NaiveDateTime>,
    pub last_active: Option<NaiveDateTime>,
    /// Comma-separated airline names, `null` when the user owns none.
    pub airlines: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserListItemDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserProfileDto {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub status: String,
    pub admin_status: Option<String>,
    pub level: i32,
    pub creation_time: Option<NaiveDateTime>,
    pub last_active: Option<NaiveDateTime>,
    pub airline_ids: Option<String>,
    pub airline_names: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserIpDto {
    pub ip: String,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserModifierDto {
    pub modifier_name: String,
    pub creation: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserUuidDto {
    pub uuid: String,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDetailDto {
    pub user: UserProfileDto,
    pub ips: Vec<UserIpDto>,
    pub modifiers: Vec<UserModifierDto>,
    pub uuids: Vec<UserUuidDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IpUserDto {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub status: String,
    pub level: i32,
    pub occurrence: i32,
    pub last_update: Option<NaiveDateTime>,
    pub airlines: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct IpLookupDto {
    pub users: Vec<IpUserDto>,
    pub ip: String,
}
