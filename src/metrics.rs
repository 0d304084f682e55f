use average::{Estimate, Mean};

use crate::sim::driver::Schedule;
use crate::sim::job::Ticks;

/// Derived timings for one completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobMetrics {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub start: Ticks,
    pub completion: Ticks,
    pub waiting: Ticks,
    pub turnaround: Ticks,
    pub response: Ticks,
}

/// Per-job rows plus aggregates over the whole run. Every job weighs the same
/// in the averages regardless of queue level.
#[derive(Debug, Clone)]
pub struct MetricsReport {
    pub rows: Vec<JobMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    /// Busy fraction of the elapsed time, in percent.
    pub utilization: f64,
    /// Completed jobs per unit of elapsed time.
    pub throughput: f64,
    pub elapsed: Ticks,
}

pub fn report(schedule: &Schedule) -> MetricsReport {
    let mut rows = Vec::with_capacity(schedule.jobs.len());
    let mut total_burst: u64 = 0;

    for job in &schedule.jobs {
        // A completed schedule always carries both timestamps. A missing pair
        // is a scheduler bug; release builds skip the row rather than panic.
        let (start, completion) = match (job.start, job.completion) {
            (Some(start), Some(completion)) => (start, completion),
            _ => {
                debug_assert!(
                    false,
                    "job {} missing timestamps in a completed schedule",
                    job.spec.id
                );
                continue;
            }
        };

        let turnaround = completion - job.spec.arrival;
        let waiting = turnaround - job.spec.burst;
        let response = start - job.spec.arrival;
        total_burst += job.spec.burst;

        rows.push(JobMetrics {
            id: job.spec.id.clone(),
            arrival: job.spec.arrival,
            burst: job.spec.burst,
            start,
            completion,
            waiting,
            turnaround,
            response,
        });
    }

    let elapsed = schedule.elapsed;
    let utilization = if elapsed > 0 {
        total_burst as f64 / elapsed as f64 * 100.0
    } else {
        0.0
    };
    let throughput = if elapsed > 0 {
        rows.len() as f64 / elapsed as f64
    } else {
        0.0
    };

    MetricsReport {
        avg_waiting: mean(rows.iter().map(|r| r.waiting as f64)),
        avg_turnaround: mean(rows.iter().map(|r| r.turnaround as f64)),
        avg_response: mean(rows.iter().map(|r| r.response as f64)),
        utilization,
        throughput,
        elapsed,
        rows,
    }
}

fn mean(iter: impl Iterator<Item = f64>) -> f64 {
    let mut mean = Mean::new();
    let mut samples = 0usize;
    for value in iter {
        mean.add(value);
        samples += 1;
    }
    // estimate() is NaN over an empty sample; an empty run averages to 0
    if samples == 0 {
        0.0
    } else {
        mean.estimate()
    }
}
