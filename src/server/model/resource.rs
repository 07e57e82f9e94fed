//! Host resource snapshot sampled from the operating system.

use chrono::{DateTime, Utc};

use crate::{
    model::resource::{CpuDto, DiskDto, LoadAverageDto, MemoryDto, NetworkDto, ServerResourcesDto},
    server::model::bot::round1,
};

/// Used/total byte counts for memory-like resources.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Usage {
    pub total: u64,
    pub used: u64,
    pub available: u64,
}

impl Usage {
    /// Usage percentage rounded to one decimal, 0 when the total is 0.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round1(self.used as f64 / self.total as f64 * 100.0)
    }

    pub fn into_dto(self) -> MemoryDto {
        MemoryDto {
            total: self.total,
            used: self.used,
            available: self.available,
            percent: self.percent(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskUsage {
    pub name: String,
    pub mount_point: String,
    pub file_system: String,
    pub usage: Usage,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CpuUsage {
    pub usage_percent: f64,
    pub cores: usize,
    pub load_one: f64,
    pub load_five: f64,
    pub load_fifteen: f64,
}

/// Point-in-time view of host resources. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot {
    pub cpu: CpuUsage,
    pub memory: Usage,
    pub swap: Usage,
    pub disks: Vec<DiskUsage>,
    pub bytes_sent: u64,
    pub bytes_recv: u64,
    pub uptime_seconds: u64,
    /// Boot time as seconds since the Unix epoch.
    pub boot_time: u64,
    pub taken_at: DateTime<Utc>,
}

impl ResourceSnapshot {
    /// Sum of all disks.
    pub fn disk_total(&self) -> Usage {
        self.disks.iter().fold(Usage::default(), |acc, d| Usage {
            total: acc.total + d.usage.total,
            used: acc.used + d.usage.used,
            available: acc.available + d.usage.available,
        })
    }

    pub fn into_dto(self) -> ServerResourcesDto {
        let disk = self.disk_total().into_dto();
        let boot_time = DateTime::from_timestamp(self.boot_time as i64, 0);

        ServerResourcesDto {
            cpu: CpuDto {
                usage_percent: round1(self.cpu.usage_percent),
                cores: self.cpu.cores,
                load_average: LoadAverageDto {
                    one: self.cpu.load_one,
                    five: self.cpu.load_five,
                    fifteen: self.cpu.load_fifteen,
                },
            },
            memory: self.memory.into_dto(),
            swap: self.swap.into_dto(),
            disk,
            disks: self
                .disks
                .into_iter()
                .map(|d| DiskDto {
                    percent: d.usage.percent(),
                    name: d.name,
                    mount_point: d.mount_point,
                    file_system: d.file_system,
                    total: d.usage.total,
                    used: d.usage.used,
                    available: d.usage.available,
                })
                .collect(),
            network: NetworkDto {
                bytes_sent: self.bytes_sent,
                bytes_recv: self.bytes_recv,
            },
            uptime_seconds: self.uptime_seconds,
            boot_time,
            timestamp: self.taken_at,
        }
    }
}
