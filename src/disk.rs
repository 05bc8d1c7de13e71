//! Disk utilization for a single mount point via `df -P`.
//!
//! The POSIX portable format pins the column layout:
//!   Filesystem 1024-blocks Used Available Capacity Mounted on
//! Capacity is the "percent used" figure with a trailing `%`.

use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::{ProbeError, Result};
use crate::util::round2;

pub const DEFAULT_MOUNT: &str = "/";

const SOURCE: &str = "disk usage (df)";

/// Extract the capacity percentage from `df -P <mount>` output.
///
/// Expects a header line followed by exactly one data line for the
/// queried filesystem; the capacity field is the one carrying a `%`.
pub fn parse_df_output(output: &str) -> Result<f64> {
    let data_line = output
        .lines()
        .nth(1)
        .ok_or_else(|| ProbeError::data_unavailable(SOURCE, "no filesystem line in df output"))?;

    let capacity = data_line
        .split_whitespace()
        .find_map(|field| field.strip_suffix('%'))
        .ok_or_else(|| ProbeError::data_unavailable(SOURCE, "no capacity field in df output"))?;

    let pct: f64 = capacity.parse().map_err(|_| {
        ProbeError::data_unavailable(SOURCE, format!("unparsable capacity {:?}", capacity))
    })?;
    Ok(round2(pct))
}

/// Percent of the filesystem holding `mount_point` in use.
pub fn read_disk_utilization(mount_point: &Path) -> Result<f64> {
    let output = Command::new("df")
        .arg("-P")
        .arg("--")
        .arg(mount_point)
        .output()
        .map_err(|e| ProbeError::data_unavailable(SOURCE, e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::data_unavailable(
            SOURCE,
            format!(
                "df failed for {}: {}",
                mount_point.display(),
                stderr.trim()
            ),
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let pct = parse_df_output(&stdout)?;
    debug!("[disk] {} used {:.2}%", mount_point.display(), pct);
    Ok(pct)
}
