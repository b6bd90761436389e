/*!
 * CPU Scheduling Simulator - Command-Line Entry Point
 *
 * Usage: sched-sim <workload.json | -> [policy]
 *
 * The workload is a JSON array of process specifications:
 *   [{"id": 1, "name": "A", "arrival": 0, "burst": 4, "priority": 2}, ...]
 */

use anyhow::Context;
use cpu_sched_sim::{
    compare, init_tracing, simulate, OutputFormat, ProcessSpec, Report, SimConfig,
};
use miette::IntoDiagnostic;
use std::fs;
use std::io::{self, Read};
use tracing::info;

fn main() -> miette::Result<()> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        return Err(miette::miette!(
            help = "Pass a JSON workload file, or '-' to read it from stdin.",
            "usage: sched-sim <workload.json | -> [policy]"
        ));
    };

    let mut config = SimConfig::from_env()?;
    if let Some(policy) = args.next() {
        config.policy = policy.parse()?;
    }

    let specs = load_workload(&path).map_err(|e| miette::miette!("{:#}", e))?;
    info!(path = %path, processes = specs.len(), policy = %config.policy, "workload loaded");

    let reports = if config.compare {
        compare(&specs, config.params)?
    } else {
        vec![simulate(&specs, config.policy, config.params)?]
    };

    match config.output {
        OutputFormat::Json => {
            let json = if config.compare {
                serde_json::to_string_pretty(&reports)
            } else {
                serde_json::to_string_pretty(&reports[0])
            }
            .into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for report in &reports {
                print_report(report);
            }
        }
    }

    Ok(())
}

/// Read a workload from a file path, or stdin when the path is `-`
fn load_workload(path: &str) -> anyhow::Result<Vec<ProcessSpec>> {
    let raw = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read workload from stdin")?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read workload '{}'", path))?
    };

    serde_json::from_str(&raw).with_context(|| format!("Invalid workload JSON in '{}'", path))
}

fn print_report(report: &Report) {
    match report.quantum {
        Some(quantum) => println!("== {} (quantum={}) ==", report.policy, quantum.ticks()),
        None => println!("== {} ==", report.policy),
    }
    println!("Timeline: {}", report.timeline_line());
    println!();
    println!(
        "{:>5}  {:<12} {:>7} {:>5} {:>8} {:>10} {:>7} {:>10} {:>8}",
        "PID", "Name", "Arrival", "Burst", "Priority", "Completion", "Waiting", "Turnaround", "Response"
    );
    for p in &report.processes {
        println!(
            "{:>5}  {:<12} {:>7} {:>5} {:>8} {:>10} {:>7} {:>10} {:>8}",
            p.id, p.display_name(), p.arrival, p.burst, p.priority, p.completion, p.waiting, p.turnaround, p.response
        );
    }

    let m = &report.metrics;
    println!();
    println!("Average waiting time:    {:.2}", m.avg_waiting);
    println!("Average turnaround time: {:.2}", m.avg_turnaround);
    println!("Average response time:   {:.2}", m.avg_response);
    println!("Total time:              {}", m.total_time);
    println!("Idle time:               {}", m.idle_time);
    println!("CPU utilization:         {:.1}%", m.utilization * 100.0);
    println!("Context switches:        {}", m.context_switches);
    println!("Preemptions:             {}", m.preemptions);
    println!();
}
