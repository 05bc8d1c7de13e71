pub mod disk;
pub mod error;
pub mod health;
pub mod mem;
pub mod report;
pub mod sampler;
pub mod stat;
pub mod util;

pub use error::{ProbeError, Result};
pub use health::{evaluate, HealthReport, Metric, Verdict, DEFAULT_THRESHOLD};
pub use stat::CpuTimes;
