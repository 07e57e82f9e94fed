//! Recent game log entries.

use std::collections::HashMap;

use crate::model::log::{LogEntryDto, RecentLogsDto};

/// Largest number of log rows returned at once.
pub const MAX_LOG_LIMIT: u64 = 500;
/// Number of log rows returned when the caller does not ask for a limit.
pub const DEFAULT_LOG_LIMIT: u64 = 50;

/// Message returned in place of logs when the deployment has no log table.
pub const LOG_TABLE_MISSING: &str = "Log table not found";

/// Normalizes a requested row limit to `1..=MAX_LOG_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> u64 {
    limit
        .map(|l| l.clamp(1, MAX_LOG_LIMIT as i64) as u64)
        .unwrap_or(DEFAULT_LOG_LIMIT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub id: i32,
    pub airline_id: i32,
    pub airline_name: Option<String>,
    pub message: String,
    pub category: i32,
    pub severity: i32,
    pub cycle: i32,
}

impl LogEntry {
    /// Builds a log entry, resolving the airline name from `names` when known.
    pub fn from_entity(entity: entity::log::Model, names: &HashMap<i32, String>) -> Self {
        Self {
            id: entity.id,
            airline_id: entity.airline,
            airline_name: names.get(&entity.airline).cloned(),
            message: entity.message,
            category: entity.category,
            severity: entity.severity,
            cycle: entity.cycle,
        }
    }
}

/// Result of a recent-logs query.
#[derive(Debug, Clone, PartialEq)]
pub enum RecentLogs {
    Entries(Vec<LogEntry>),
    /// The deployment has no log table.
    TableMissing,
}

impl RecentLogs {
    pub fn into_dto(self) -> RecentLogsDto {
        match self {
            RecentLogs::Entries(entries) => RecentLogsDto {
                logs: entries
                    .into_iter()
                    .map(|e| LogEntryDto {
                        id: e.id,
                        airline_id: e.airline_id,
                        airline_name: e.airline_name,
                        message: e.message,
                        category: e.category,
                        severity: e.severity,
                        cycle: e.cycle,
                    })
                    .collect(),
                message: None,
            },
            RecentLogs::TableMissing => RecentLogsDto {
                logs: Vec::new(),
                message: Some(LOG_TABLE_MISSING.to_string()),
            },
        }
    }
}
