//! CPU utilization sampling.
//!
//! The counters in /proc/stat are cumulative, so utilization is only
//! defined as a rate over an interval: two snapshots, a sleep in
//! between, and a delta. The derivation itself is a pure function so it
//! can be tested without waiting on a real clock.

use std::path::Path;
use std::thread;
use std::time::Duration;

use log::{debug, warn};

use crate::error::Result;
use crate::stat::{read_cpu_times, CpuTimes};
use crate::util::round2;

/// Utilization percentage between two counter snapshots.
///
/// A zero total delta (interval too short, or a frozen clock source in a
/// VM) yields 0.00 rather than an error or NaN. Counter wraparound
/// saturates to the same degenerate case instead of underflowing.
pub fn cpu_utilization_between(a: &CpuTimes, b: &CpuTimes) -> f64 {
    let delta_idle = b.idle_time().saturating_sub(a.idle_time());
    let delta_total = b.total_time().saturating_sub(a.total_time());

    if delta_total == 0 {
        warn!("[cpu] zero total delta between snapshots, reporting 0.00");
        return 0.0;
    }

    let busy = (1.0 - delta_idle as f64 / delta_total as f64) * 100.0;
    round2(busy.clamp(0.0, 100.0))
}

/// Sample CPU utilization over `interval` with a blocking sleep.
pub fn sample_cpu_utilization(interval: Duration, stat_path: &Path) -> Result<f64> {
    let first = read_cpu_times(stat_path)?;
    thread::sleep(interval);
    let second = read_cpu_times(stat_path)?;

    let pct = cpu_utilization_between(&first, &second);
    debug!("[cpu] utilization over {:?}: {:.2}%", interval, pct);
    Ok(pct)
}
