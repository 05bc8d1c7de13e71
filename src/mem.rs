//! Memory utilization from /proc/meminfo.
//!
//! Uses MemAvailable rather than MemFree: the kernel's estimate already
//! accounts for reclaimable caches, so page cache does not show up as
//! "used" memory.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{ProbeError, Result};
use crate::util::round2;

pub const PROC_MEMINFO: &str = "/proc/meminfo";

const SOURCE: &str = "memory info (/proc/meminfo)";

/// Parse `MemTotal:` and `MemAvailable:` (kB) out of meminfo content.
pub fn parse_meminfo(content: &str) -> Result<(u64, u64)> {
    let mut total_kb = None;
    let mut available_kb = None;

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            total_kb = rest.split_whitespace().next().and_then(|v| v.parse().ok());
        } else if let Some(rest) = line.strip_prefix("MemAvailable:") {
            available_kb = rest.split_whitespace().next().and_then(|v| v.parse().ok());
        }
        if total_kb.is_some() && available_kb.is_some() {
            break;
        }
    }

    match (total_kb, available_kb) {
        (Some(total), Some(available)) => Ok((total, available)),
        (None, _) => Err(ProbeError::data_unavailable(SOURCE, "missing MemTotal")),
        (_, None) => Err(ProbeError::data_unavailable(SOURCE, "missing MemAvailable")),
    }
}

/// Percentage of memory in use, counting reclaimable caches as free.
pub fn read_memory_utilization(path: &Path) -> Result<f64> {
    let content = fs::read_to_string(path)
        .map_err(|e| ProbeError::data_unavailable(SOURCE, e.to_string()))?;
    let (total_kb, available_kb) = parse_meminfo(&content)?;

    // Unreachable on a real kernel, but a zero total must not divide.
    if total_kb == 0 {
        return Ok(0.0);
    }

    let used_kb = total_kb.saturating_sub(available_kb);
    let pct = round2(used_kb as f64 / total_kb as f64 * 100.0);
    debug!(
        "[mem] total={}kB available={}kB used={:.2}%",
        total_kb, available_kb, pct
    );
    Ok(pct)
}
