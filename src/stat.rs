//! Aggregate CPU time counters from /proc/stat.
//!
//! Format of the line we care about:
//!   cpu  user nice system idle iowait irq softirq steal guest guest_nice
//!
//! The values are cumulative jiffies since boot and only carry meaning as
//! deltas between two snapshots.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{ProbeError, Result};

pub const PROC_STAT: &str = "/proc/stat";

const SOURCE: &str = "cpu counters (/proc/stat)";
const FIELD_COUNT: usize = 10;

/// One snapshot of the whole-system CPU time counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuTimes {
    /// Time spent not doing useful work. I/O wait counts as idle for
    /// this metric.
    ///
    /// Sums saturate: counters close to wrapping must degrade into the
    /// zero-delta case downstream, not overflow here.
    pub fn idle_time(&self) -> u64 {
        self.idle.saturating_add(self.iowait)
    }

    pub fn total_time(&self) -> u64 {
        [
            self.user,
            self.nice,
            self.system,
            self.idle,
            self.iowait,
            self.irq,
            self.softirq,
            self.steal,
            self.guest,
            self.guest_nice,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Parse the aggregate "cpu " line out of /proc/stat content.
///
/// The per-core "cpuN" lines are skipped; exactly ten numeric fields must
/// follow the label.
pub fn parse_proc_stat(content: &str) -> Result<CpuTimes> {
    let line = content
        .lines()
        .find(|l| l.starts_with("cpu "))
        .ok_or_else(|| ProbeError::data_unavailable(SOURCE, "no aggregate cpu line"))?;

    let mut fields = [0u64; FIELD_COUNT];
    let mut count = 0;
    for token in line.split_whitespace().skip(1).take(FIELD_COUNT) {
        fields[count] = token.parse::<u64>().map_err(|_| {
            ProbeError::data_unavailable(SOURCE, format!("non-numeric field {:?}", token))
        })?;
        count += 1;
    }
    if count < FIELD_COUNT {
        return Err(ProbeError::data_unavailable(
            SOURCE,
            format!("expected {} fields, found {}", FIELD_COUNT, count),
        ));
    }

    Ok(CpuTimes {
        user: fields[0],
        nice: fields[1],
        system: fields[2],
        idle: fields[3],
        iowait: fields[4],
        irq: fields[5],
        softirq: fields[6],
        steal: fields[7],
        guest: fields[8],
        guest_nice: fields[9],
    })
}

/// Read and parse one counter snapshot.
pub fn read_cpu_times(path: &Path) -> Result<CpuTimes> {
    let content = fs::read_to_string(path)
        .map_err(|e| ProbeError::data_unavailable(SOURCE, e.to_string()))?;
    let times = parse_proc_stat(&content)?;
    debug!(
        "[stat] snapshot from {}: total={} idle={}",
        path.display(),
        times.total_time(),
        times.idle_time()
    );
    Ok(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT_LINE: &str = "cpu  1000 50 300 8000 200 10 20 5 0 0\n\
                             cpu0 500 25 150 4000 100 5 10 2 0 0\n\
                             intr 12345678\n";

    #[test]
    fn test_parse_aggregate_line() {
        let times = parse_proc_stat(STAT_LINE).unwrap();
        assert_eq!(times.user, 1000);
        assert_eq!(times.idle, 8000);
        assert_eq!(times.iowait, 200);
        assert_eq!(times.guest_nice, 0);
    }

    #[test]
    fn test_idle_groups_iowait() {
        let times = parse_proc_stat(STAT_LINE).unwrap();
        assert_eq!(times.idle_time(), 8200);
        assert_eq!(times.total_time(), 9585);
    }

    #[test]
    fn test_sums_saturate_near_counter_limits() {
        let times = CpuTimes {
            user: u64::MAX - 10,
            idle: u64::MAX - 10,
            iowait: 100,
            ..CpuTimes::default()
        };
        assert_eq!(times.idle_time(), u64::MAX);
        assert_eq!(times.total_time(), u64::MAX);
    }

    #[test]
    fn test_per_core_lines_ignored() {
        // "cpu0" must not satisfy the "cpu " prefix match
        let content = "cpu0 1 2 3 4 5 6 7 8 9 10\n";
        assert!(parse_proc_stat(content).is_err());
    }

    #[test]
    fn test_missing_cpu_line() {
        let err = parse_proc_stat("intr 42\nctxt 7\n").unwrap_err();
        assert!(err.to_string().contains("no aggregate cpu line"));
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_proc_stat("cpu  1 2 3 4\n").unwrap_err();
        assert!(err.to_string().contains("expected 10 fields"));
    }

    #[test]
    fn test_non_numeric_field() {
        let err = parse_proc_stat("cpu  1 2 3 four 5 6 7 8 9 10\n").unwrap_err();
        assert!(err.to_string().contains("non-numeric"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_cpu_times(Path::new("/nonexistent/proc/stat")).unwrap_err();
        assert_eq!(err.source_name(), SOURCE);
    }
}
