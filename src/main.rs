use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mlq_sim::{ingest, report, MetricsReport, MlqSim, RawJob};
use rand::prelude::*;

/// Multi-level queue scheduling simulator: FCFS on the high and low queues,
/// non-preemptive SJF on the medium queue, queues run strictly in priority
/// order over one shared clock.
#[derive(Parser, Debug)]
#[command(name = "mlq-sim", version, about)]
struct Args {
    /// JSON file holding an array of {"id", "arrival", "burst", "queue"} records
    #[arg(long, conflicts_with = "random")]
    jobs: Option<PathBuf>,

    /// Generate a random workload spanning this many arrival ticks instead
    #[arg(long)]
    random: Option<u64>,

    /// Seed for the random workload
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Arrival probability per tick for the random workload
    #[arg(long, default_value_t = 0.3)]
    p_arrival: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let raws = match (&args.jobs, args.random) {
        (Some(path), _) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<Vec<RawJob>>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        (None, Some(ticks)) => bernoulli_jobs(ticks, args.p_arrival, args.seed),
        (None, None) => anyhow::bail!("provide --jobs <file> or --random <ticks>"),
    };

    let jobs = ingest(raws).context("invalid job batch")?;
    let schedule = MlqSim::new(jobs).run();
    print_report(&report(&schedule));

    Ok(())
}

/// Bernoulli arrivals: each tick spawns a job with probability `p_arrival`,
/// with burst and queue level drawn uniformly. Seeded for reproducibility.
fn bernoulli_jobs(ticks: u64, p_arrival: f64, seed: u64) -> Vec<RawJob> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut jobs = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            jobs.push(RawJob {
                id: format!("P{}", jobs.len() + 1),
                arrival: t as i64,
                burst: rng.random_range(1..=8),
                queue: rng.random_range(1..=3),
            });
        }
    }

    jobs
}

fn print_report(m: &MetricsReport) {
    println!(
        "{:<12} {:<15} {:<12} {:<12} {:<18} {:<15} {:<18} {:<15}",
        "Process ID",
        "Arrival Time",
        "Burst Time",
        "Start Time",
        "Completion Time",
        "Waiting Time",
        "Turnaround Time",
        "Response Time"
    );
    for r in &m.rows {
        println!(
            "{:<12} {:<15} {:<12} {:<12} {:<18} {:<15} {:<18} {:<15}",
            r.id, r.arrival, r.burst, r.start, r.completion, r.waiting, r.turnaround, r.response
        );
    }
    println!();
    println!("Average Waiting Time:    {:.2}", m.avg_waiting);
    println!("Average Turnaround Time: {:.2}", m.avg_turnaround);
    println!("Average Response Time:   {:.2}", m.avg_response);
    println!("CPU Utilization:         {:.2}%", m.utilization);
    println!("Throughput:              {:.4} jobs/unit time", m.throughput);
}
