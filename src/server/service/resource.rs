//! Host resource sampling.
//!
//! CPU usage needs two samples taken at least `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`
//! apart, so sampling blocks the calling thread. `ResourceService::sample` moves it onto
//! tokio's blocking pool.

use chrono::Utc;
use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};

use crate::server::{
    error::{internal::InternalError, AppError},
    model::resource::{CpuUsage, DiskUsage, ResourceSnapshot, Usage},
};

pub struct ResourceService;

impl ResourceService {
    /// Takes a fresh snapshot of CPU, memory, swap, disk and network usage.
    ///
    /// # Returns
    /// - `Ok(ResourceSnapshot)` - Point-in-time host usage
    /// - `Err(AppError::InternalErr)` - The blocking sampling task panicked
    pub async fn sample() -> Result<ResourceSnapshot, AppError> {
        let snapshot = tokio::task::spawn_blocking(sample_blocking)
            .await
            .map_err(InternalError::SamplingTask)?;

        Ok(snapshot)
    }
}

fn sample_blocking() -> ResourceSnapshot {
    let mut sys = System::new_with_specifics(
        RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::everything())
            .with_memory(MemoryRefreshKind::everything()),
    );
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
    sys.refresh_cpu_usage();
    sys.refresh_memory();

    let load = System::load_average();
    let cpu = CpuUsage {
        usage_percent: sys.global_cpu_usage() as f64,
        cores: sys.cpus().len(),
        load_one: load.one,
        load_five: load.five,
        load_fifteen: load.fifteen,
    };

    let memory = Usage {
        total: sys.total_memory(),
        used: sys.used_memory(),
        available: sys.available_memory(),
    };
    let swap = Usage {
        total: sys.total_swap(),
        used: sys.used_swap(),
        available: sys.free_swap(),
    };

    let disks = Disks::new_with_refreshed_list()
        .list()
        .iter()
        .map(|disk| {
            let total = disk.total_space();
            let available = disk.available_space();

            DiskUsage {
                name: disk.name().to_string_lossy().into_owned(),
                mount_point: disk.mount_point().to_string_lossy().into_owned(),
                file_system: disk.file_system().to_string_lossy().into_owned(),
                usage: Usage {
                    total,
                    used: total.saturating_sub(available),
                    available,
                },
            }
        })
        .collect();

    let networks = Networks::new_with_refreshed_list();
    let (bytes_recv, bytes_sent) = networks
        .list()
        .values()
        .fold((0u64, 0u64), |(recv, sent), data| {
            (
                recv.saturating_add(data.total_received()),
                sent.saturating_add(data.total_transmitted()),
            )
        });

    ResourceSnapshot {
        cpu,
        memory,
        swap,
        disks,
        bytes_sent,
        bytes_recv,
        uptime_seconds: System::uptime(),
        boot_time: System::boot_time(),
        taken_at: Utc::now(),
    }
}
