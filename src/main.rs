use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use vmhealth::disk::{read_disk_utilization, DEFAULT_MOUNT};
use vmhealth::mem::{read_memory_utilization, PROC_MEMINFO};
use vmhealth::report::render;
use vmhealth::sampler::sample_cpu_utilization;
use vmhealth::stat::PROC_STAT;
use vmhealth::{evaluate, DEFAULT_THRESHOLD};

/// Exit code for a broken probe, distinct from both verdicts.
const EXIT_PROBE_FAILED: i32 = 2;

#[derive(Parser, Debug)]
#[command(version, about = "One-shot VM health check against a 60% utilization threshold")]
struct Args {
    /// CPU sampling interval in milliseconds
    #[arg(long, default_value_t = 500)]
    interval_ms: u64,

    /// Override the CPU counter source
    #[arg(long, default_value = PROC_STAT)]
    proc_stat: PathBuf,

    /// Override the memory info source
    #[arg(long, default_value = PROC_MEMINFO)]
    meminfo: PathBuf,

    /// Mount point checked for disk usage
    #[arg(long, default_value = DEFAULT_MOUNT)]
    mount: PathBuf,

    /// Output the report as JSON for scripting/integration
    #[arg(long)]
    json: bool,

    /// Disable colorized output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Print the full utilization breakdown alongside the verdict
    Explain,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let explain = matches!(args.command, Some(Command::Explain));
    let color = !args.no_color;

    let cpu = sample_cpu_utilization(Duration::from_millis(args.interval_ms), &args.proc_stat);
    let mem = read_memory_utilization(&args.meminfo);
    let disk = read_disk_utilization(&args.mount);

    // Report every broken source, not just the first one.
    let mut probe_failed = false;
    for err in [&cpu, &mem, &disk].into_iter().filter_map(|r| r.as_ref().err()) {
        eprintln!("vmhealth: {}", err);
        probe_failed = true;
    }
    if probe_failed {
        process::exit(EXIT_PROBE_FAILED);
    }

    let (Ok(cpu), Ok(mem), Ok(disk)) = (cpu, mem, disk) else {
        unreachable!("probe errors handled above");
    };

    let report = evaluate(cpu, mem, disk, DEFAULT_THRESHOLD);

    if args.json {
        match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("vmhealth: failed to serialize report: {e}");
                process::exit(EXIT_PROBE_FAILED);
            }
        }
        process::exit(report.verdict.exit_code());
    }

    let (text, exit_code) = render(&report, explain, color);
    print!("{text}");
    process::exit(exit_code);
}
