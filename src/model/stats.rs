use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatusCountDto {
    pub status: String,
    pub count: i64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TopUserDto {
    pub user_name: String,
    pub email: String,
    pub level: i32,
    pub status: String,
    pub last_active: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StatsDto {
    pub total_users: u64,
    /// Users active in the last 7 days.
    pub active_users: u64,
    /// Users created in the last 30 days.
    pub new_users: u64,
    pub status_breakdown: Vec<StatusCountDto>,
    pub top_users: Vec<TopUserDto>,
}
