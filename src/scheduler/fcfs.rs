use tracing::debug;

use super::QueueDiscipline;
use crate::sim::job::{JobRun, Ticks};

/// First-come-first-served: jobs run in strict queue order, never reordered
/// by burst length. Used for the high and low queues.
pub struct FcfsScheduler;

impl QueueDiscipline for FcfsScheduler {
    fn run(&self, queue: &mut [JobRun], mut clock: Ticks) -> Ticks {
        for job in queue.iter_mut() {
            // Server idle until the next job shows up
            if clock < job.spec.arrival {
                clock = job.spec.arrival;
            }

            let start = clock;
            job.start = Some(start);
            clock += job.spec.burst;
            job.completion = Some(clock);

            debug!(id = %job.spec.id, start, completion = clock, "fcfs job completed");
        }
        clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::job::{JobSpec, QueueLevel};

    fn queue(specs: &[(&str, Ticks, Ticks)]) -> Vec<JobRun> {
        specs
            .iter()
            .map(|&(id, arrival, burst)| {
                JobRun::new(JobSpec::new(id, arrival, burst, QueueLevel::High))
            })
            .collect()
    }

    #[test]
    fn empty_queue_leaves_clock_unchanged() {
        let mut q = queue(&[]);
        assert_eq!(FcfsScheduler.run(&mut q, 42), 42);
    }

    #[test]
    fn runs_back_to_back_in_queue_order() {
        let mut q = queue(&[("A", 0, 4), ("B", 1, 2), ("C", 2, 6)]);
        let clock = FcfsScheduler.run(&mut q, 0);

        assert_eq!(clock, 12);
        assert_eq!(q[0].start, Some(0));
        assert_eq!(q[0].completion, Some(4));
        assert_eq!(q[1].start, Some(4));
        assert_eq!(q[1].completion, Some(6));
        assert_eq!(q[2].start, Some(6));
        assert_eq!(q[2].completion, Some(12));
    }

    #[test]
    fn idle_jump_when_clock_behind_arrival() {
        let mut q = queue(&[("A", 5, 2), ("B", 10, 1)]);
        let clock = FcfsScheduler.run(&mut q, 0);

        // Idle 0..5 and 7..10; no output rows for idle intervals
        assert_eq!(q[0].start, Some(5));
        assert_eq!(q[1].start, Some(10));
        assert_eq!(clock, 11);
    }

    #[test]
    fn never_reorders_by_burst() {
        // A long job ahead of a short one stays ahead
        let mut q = queue(&[("LONG", 0, 9), ("SHORT", 0, 1)]);
        FcfsScheduler.run(&mut q, 0);

        assert_eq!(q[0].start, Some(0));
        assert_eq!(q[1].start, Some(9));
    }

    #[test]
    fn starting_clock_carries_into_first_job() {
        let mut q = queue(&[("A", 0, 3)]);
        let clock = FcfsScheduler.run(&mut q, 7);

        assert_eq!(q[0].start, Some(7));
        assert_eq!(clock, 10);
    }
}
