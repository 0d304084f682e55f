use super::job::{JobRun, JobSpec, QueueLevel};

/// The three per-level queues, each stably sorted by ascending arrival.
#[derive(Debug, Default)]
pub struct LevelQueues {
    pub high: Vec<JobRun>,
    pub medium: Vec<JobRun>,
    pub low: Vec<JobRun>,
}

impl LevelQueues {
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split jobs by level and arrival-sort each queue. The sort is stable, so
/// jobs with equal arrivals keep their input order. No job is dropped or
/// duplicated.
pub fn partition(jobs: Vec<JobSpec>) -> LevelQueues {
    let mut queues = LevelQueues::default();
    for spec in jobs {
        let run = JobRun::new(spec);
        match run.spec.level {
            QueueLevel::High => queues.high.push(run),
            QueueLevel::Medium => queues.medium.push(run),
            QueueLevel::Low => queues.low.push(run),
        }
    }
    for queue in [&mut queues.high, &mut queues.medium, &mut queues.low] {
        queue.sort_by_key(|j| j.spec.arrival);
    }
    queues
}
