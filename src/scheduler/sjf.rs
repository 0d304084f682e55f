use tracing::debug;

use super::QueueDiscipline;
use crate::sim::job::{JobRun, Ticks};

/// Non-preemptive shortest-job-first with dynamic readiness: among the jobs
/// that have arrived and not yet started, the one with the smallest burst
/// runs next. Used for the medium queue.
pub struct SjfScheduler;

impl QueueDiscipline for SjfScheduler {
    fn run(&self, queue: &mut [JobRun], mut clock: Ticks) -> Ticks {
        let mut remaining = queue.len();

        while remaining > 0 {
            // Rebuild the ready list each decision cycle. The queue is
            // arrival-sorted, so scan order doubles as the tie-break order:
            // earliest arrival first, then original input order.
            let ready: Vec<usize> = (0..queue.len())
                .filter(|&i| !queue[i].started() && queue[i].spec.arrival <= clock)
                .collect();

            if ready.is_empty() {
                // Idle jump to the next arrival instead of ticking forward
                let next_arrival = queue
                    .iter()
                    .filter(|j| !j.started())
                    .map(|j| j.spec.arrival)
                    .min();
                match next_arrival {
                    Some(t) => clock = clock.max(t),
                    // Unreachable while remaining > 0; keeps the loop bounded
                    None => clock += 1,
                }
                continue;
            }

            // First minimal burst wins ties. Iterator::min_by_key keeps the
            // last minimum, which would invert the tie-break.
            let mut pick = ready[0];
            for &i in &ready[1..] {
                if queue[i].spec.burst < queue[pick].spec.burst {
                    pick = i;
                }
            }

            let job = &mut queue[pick];
            let start = clock;
            job.start = Some(start);
            clock += job.spec.burst;
            job.completion = Some(clock);
            remaining -= 1;

            debug!(id = %job.spec.id, start, completion = clock, "sjf job completed");
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
                JobRun::new(JobSpec::new(id, arrival, burst, QueueLevel::Medium))
            })
            .collect()
    }

    fn start_of(q: &[JobRun], id: &str) -> Ticks {
        q.iter()
            .find(|j| j.spec.id == id)
            .and_then(|j| j.start)
            .unwrap()
    }

    #[test]
    fn empty_queue_leaves_clock_unchanged() {
        let mut q = queue(&[]);
        assert_eq!(SjfScheduler.run(&mut q, 42), 42);
    }

    #[test]
    fn picks_shortest_among_ready() {
        // All arrived by clock 0: shortest burst goes first
        let mut q = queue(&[("A", 0, 5), ("B", 0, 1), ("C", 0, 3)]);
        let clock = SjfScheduler.run(&mut q, 0);

        assert_eq!(start_of(&q, "B"), 0);
        assert_eq!(start_of(&q, "C"), 1);
        assert_eq!(start_of(&q, "A"), 4);
        assert_eq!(clock, 9);
    }

    #[test]
    fn late_short_job_cannot_preempt() {
        // B arrives while A runs; A keeps the server until completion
        let mut q = queue(&[("A", 0, 6), ("B", 1, 1)]);
        SjfScheduler.run(&mut q, 0);

        assert_eq!(start_of(&q, "A"), 0);
        assert_eq!(start_of(&q, "B"), 6);
    }

    #[test]
    fn not_yet_arrived_jobs_are_ignored() {
        // At clock 0 only A is ready; the shorter B has not arrived yet
        let mut q = queue(&[("A", 0, 4), ("B", 2, 1)]);
        SjfScheduler.run(&mut q, 0);

        assert_eq!(start_of(&q, "A"), 0);
        assert_eq!(start_of(&q, "B"), 4);
    }

    #[test]
    fn equal_bursts_tie_break_on_earliest_arrival() {
        let mut q = queue(&[("EARLY", 0, 3), ("LATE", 1, 3)]);
        SjfScheduler.run(&mut q, 2);

        assert_eq!(start_of(&q, "EARLY"), 2);
        assert_eq!(start_of(&q, "LATE"), 5);
    }

    #[test]
    fn equal_bursts_and_arrivals_keep_input_order() {
        let mut q = queue(&[("FIRST", 0, 3), ("SECOND", 0, 3)]);
        SjfScheduler.run(&mut q, 0);

        assert_eq!(start_of(&q, "FIRST"), 0);
        assert_eq!(start_of(&q, "SECOND"), 3);
    }

    #[test]
    fn idle_jump_to_next_arrival() {
        let mut q = queue(&[("A", 10, 2)]);
        let clock = SjfScheduler.run(&mut q, 3);

        assert_eq!(start_of(&q, "A"), 10);
        assert_eq!(clock, 12);
    }

    #[test]
    fn job_arrived_in_the_past_starts_at_current_clock() {
        let mut q = queue(&[("A", 2, 2)]);
        let clock = SjfScheduler.run(&mut q, 5);

        assert_eq!(start_of(&q, "A"), 5);
        assert_eq!(clock, 7);
    }
}
