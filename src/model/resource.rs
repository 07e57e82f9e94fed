use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoadAverageDto {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CpuDto {
    pub usage_percent: f64,
    pub cores: usize,
    pub load_average: LoadAverageDto,
}

/// Byte counts with usage percentage, shared by memory and swap.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MemoryDto {
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiskDto {
    pub name: String,
    pub mount_point: String,
    pub file_system: String,
    pub total: u64,
    pub used: u64,
    pub available: u64,
    pub percent: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NetworkDto {
    pub bytes_sent: u64,
    pub bytes_recv: u64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ServerResourcesDto {
    pub cpu: CpuDto,
    pub memory: MemoryDto,
    pub swap: MemoryDto,
    /// Aggregate over all mounted disks.
    pub disk: MemoryDto,
    pub disks: Vec<DiskDto>,
    pub network: NetworkDto,
    pub uptime_seconds: u64,
    pub boot_time: Option<DateTime<Utc>>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AlertDto {
    /// `CRITICAL`, `WARNING` or `INFO`.
    pub level: String,
    pub category: String,
    pub message: String,
    pub value: Option<f64>,
    pub threshold: Option<f64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AlertsDto {
    pub alerts: Vec<AlertDto>,
    pub timestamp: DateTime<Utc>,
}
