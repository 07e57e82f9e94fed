//! Threshold alerts generated from a resource snapshot.

use chrono::{DateTime, Utc};

use crate::{
    model::resource::{AlertDto, AlertsDto},
    server::model::resource::ResourceSnapshot,
};

/// Usage percentage above which an alert is critical.
pub const CRITICAL_THRESHOLD: f64 = 90.0;
/// Usage percentage above which an alert is a warning.
pub const WARNING_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Critical,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Critical => "CRITICAL",
            AlertLevel::Warning => "WARNING",
            AlertLevel::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub level: AlertLevel,
    pub category: String,
    pub message: String,
    pub value: Option<f64>,
    pub threshold: Option<f64>,
}

impl Alert {
    pub fn into_dto(self) -> AlertDto {
        AlertDto {
            level: self.level.as_str().to_string(),
            category: self.category,
            message: self.message,
            value: self.value,
            threshold: self.threshold,
        }
    }
}

/// Checks a single percentage against the thresholds.
fn check(category: &str, label: &str, percent: f64) -> Option<Alert> {
    let (level, threshold) = if percent > CRITICAL_THRESHOLD {
        (AlertLevel::Critical, CRITICAL_THRESHOLD)
    } else if percent > WARNING_THRESHOLD {
        (AlertLevel::Warning, WARNING_THRESHOLD)
    } else {
        return None;
    };

    let severity = match level {
        AlertLevel::Critical => "critically high",
        _ => "high",
    };

    Some(Alert {
        level,
        category: category.to_string(),
        message: format!("{} is {}: {:.1}%", label, severity, percent),
        value: Some(percent),
        threshold: Some(threshold),
    })
}

/// Generates alerts for every breached threshold.
///
/// CPU, memory, swap and each disk are checked independently. An unreachable database
/// is always critical. When nothing is breached the result is a single INFO record.
///
/// # Arguments
/// - `snapshot` - Host resources sampled for this request
/// - `database_reachable` - Whether the game database answered a ping
pub fn generate_alerts(snapshot: &ResourceSnapshot, database_reachable: bool) -> Vec<Alert> {
    let mut alerts = Vec::new();

    alerts.extend(check("cpu", "CPU usage", snapshot.cpu.usage_percent));
    alerts.extend(check("memory", "Memory usage", snapshot.memory.percent()));
    alerts.extend(check("swap", "Swap usage", snapshot.swap.percent()));
    for disk in &snapshot.disks {
        alerts.extend(check(
            "disk",
            &format!("Disk usage on {}", disk.mount_point),
            disk.usage.percent(),
        ));
    }

    if !database_reachable {
        alerts.push(Alert {
            level: AlertLevel::Critical,
            category: "database".to_string(),
            message: "Game database is not reachable".to_string(),
            value: None,
            threshold: None,
        });
    }

    if alerts.is_empty() {
        alerts.push(Alert {
            level: AlertLevel::Info,
            category: "system".to_string(),
            message: "All systems operational".to_string(),
            value: None,
            threshold: None,
        });
    }

    alerts
}

pub fn into_dto(alerts: Vec<Alert>, timestamp: DateTime<Utc>) -> AlertsDto {
    AlertsDto {
        alerts: alerts.into_iter().map(|a| a.into_dto()).collect(),
        timestamp,
    }
}
