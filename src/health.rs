//! Threshold rule across the three utilization percentages.

use std::fmt;

use serde::Serialize;

/// Single cutoff shared by all three metrics.
pub const DEFAULT_THRESHOLD: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Memory => write!(f, "Memory"),
            Self::Disk => write!(f, "Disk"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Healthy,
    Unhealthy,
}

impl Verdict {
    /// Primary machine-readable signal for callers.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Healthy => 0,
            Self::Unhealthy => 1,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Healthy => write!(f, "Healthy"),
            Self::Unhealthy => write!(f, "Unhealthy"),
        }
    }
}

/// Outcome of one probe run. Recomputed on every invocation, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub verdict: Verdict,
    pub cpu_pct: f64,
    pub mem_pct: f64,
    pub disk_pct: f64,
    pub threshold: f64,
    pub exceeding: Vec<Metric>,
}

/// Unhealthy iff any metric is strictly above the threshold; a metric
/// sitting exactly on the threshold is still healthy.
pub fn evaluate(cpu: f64, mem: f64, disk: f64, threshold: f64) -> HealthReport {
    let exceeding: Vec<Metric> = [
        (Metric::Cpu, cpu),
        (Metric::Memory, mem),
        (Metric::Disk, disk),
    ]
    .iter()
    .filter(|(_, value)| *value > threshold)
    .map(|(metric, _)| *metric)
    .collect();

    let verdict = if exceeding.is_empty() {
        Verdict::Healthy
    } else {
        Verdict::Unhealthy
    };

    HealthReport {
        verdict,
        cpu_pct: cpu,
        mem_pct: mem,
        disk_pct: disk,
        threshold,
        exceeding,
    }
}
