use tracing::info;

use super::classify::{self, LevelQueues};
use super::job::{JobRun, JobSpec, Ticks};
use super::observer::Observer;
use crate::scheduler::{FcfsScheduler, QueueDiscipline, SjfScheduler};

/// Result of one full simulation: every job scheduled, plus the final clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// High, then Medium, then Low; each queue keeps its arrival order.
    pub jobs: Vec<JobRun>,
    /// Total elapsed simulation time.
    pub elapsed: Ticks,
}

/// Drives the three level queues strictly one after another over one shared
/// clock: FCFS on High, SJF on Medium, FCFS on Low. Medium cannot start until
/// High has drained, and Low cannot start until Medium has, regardless of
/// arrival times. Lower levels get no starvation protection.
pub struct MlqSim {
    queues: LevelQueues,
    observer: Observer,
}

impl MlqSim {
    pub fn new(jobs: Vec<JobSpec>) -> Self {
        Self {
            queues: classify::partition(jobs),
            observer: Observer::new(),
        }
    }

    pub fn run(mut self) -> Schedule {
        let fcfs = FcfsScheduler;
        let sjf = SjfScheduler;

        let mut clock: Ticks = 0;

        info!(jobs = self.queues.high.len(), "running high queue (fcfs)");
        clock = fcfs.run(&mut self.queues.high, clock);
        self.observer.observe_queue(&self.queues.high, 0);
        let high_done = clock;

        info!(jobs = self.queues.medium.len(), "running medium queue (sjf)");
        clock = sjf.run(&mut self.queues.medium, clock);
        self.observer.observe_queue(&self.queues.medium, high_done);
        let medium_done = clock;

        info!(jobs = self.queues.low.len(), "running low queue (fcfs)");
        clock = fcfs.run(&mut self.queues.low, clock);
        self.observer.observe_queue(&self.queues.low, medium_done);

        info!(elapsed = clock, "simulation complete");

        let mut jobs = self.queues.high;
        jobs.append(&mut self.queues.medium);
        jobs.append(&mut self.queues.low);

        Schedule {
            jobs,
            elapsed: clock,
        }
    }
}
