use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LogEntryDto {
    pub id: i32,
    pub airline_id: i32,
    pub airline_name: Option<String>,
    pub message: String,
    pub category: i32,
    pub severity: i32,
    pub cycle: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct RecentLogsDto {
    pub logs: Vec<LogEntryDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
