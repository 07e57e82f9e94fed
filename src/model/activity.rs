use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDayDto {
    pub date: NaiveDate,
    pub active_users: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ActivityDto {
    /// Newest date first.
    pub activity: Vec<ActivityDayDto>,
}
