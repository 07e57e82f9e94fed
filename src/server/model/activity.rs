//! Daily activity buckets keyed by the date of users' last activity.

use chrono::NaiveDate;

use crate::model::activity::{ActivityDayDto, ActivityDto};

/// Largest activity window, in days, the dashboard will query.
pub const MAX_ACTIVITY_DAYS: i64 = 365;

/// Window used when the caller does not provide one.
pub const DEFAULT_ACTIVITY_DAYS: i64 = 7;

/// Number of distinct users whose last activity fell on `date`.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub active_users: u64,
}

/// Normalizes a requested window to `1..=MAX_ACTIVITY_DAYS`.
pub fn clamp_days(days: Option<i64>) -> i64 {
    days.unwrap_or(DEFAULT_ACTIVITY_DAYS)
        .clamp(1, MAX_ACTIVITY_DAYS)
}

pub fn into_dto(activity: Vec<DailyActivity>) -> ActivityDto {
    ActivityDto {
        activity: activity
            .into_iter()
            .map(|a| ActivityDayDto {
                date: a.date,
                active_users: a.active_users,
            })
            .collect(),
    }
}
