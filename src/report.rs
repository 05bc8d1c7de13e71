//! Human-readable rendering of a probe run.
//!
//! The verdict line is a stable interface consumed by scripts; anything
//! beyond it only appears when the breakdown is asked for.

use colored::Colorize;

use crate::health::{HealthReport, Verdict};

/// Render the verdict (and optionally the breakdown) plus the exit code.
pub fn render(report: &HealthReport, explain: bool, color: bool) -> (String, i32) {
    let mut out = String::new();

    let verdict_word = match (report.verdict, color) {
        (Verdict::Healthy, true) => format!("{}", "Healthy".green().bold()),
        (Verdict::Unhealthy, true) => format!("{}", "Unhealthy".red().bold()),
        (verdict, false) => verdict.to_string(),
    };
    out.push_str(&format!("VM Health: {}\n", verdict_word));

    if explain {
        for (metric, value) in [
            ("CPU", report.cpu_pct),
            ("Memory", report.mem_pct),
            ("Disk", report.disk_pct),
        ] {
            out.push_str(&format!(
                "{:<20} {:>6.2}%\n",
                format!("{} utilization:", metric),
                value
            ));
        }

        if report.exceeding.is_empty() {
            out.push_str(&format!(
                "All metrics are within the {}% threshold.\n",
                report.threshold
            ));
        } else {
            for metric in &report.exceeding {
                let line = format!("{} utilization is above {}%", metric, report.threshold);
                if color {
                    out.push_str(&format!("{}\n", line.yellow()));
                } else {
                    out.push_str(&line);
                    out.push('\n');
                }
            }
        }
    }

    (out, report.verdict.exit_code())
}
