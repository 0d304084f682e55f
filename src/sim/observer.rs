use super::job::{JobRun, Ticks};

/// Debug-build consistency checks run after each queue phase. Violations are
/// programming errors in the schedulers, never input errors, so they are
/// debug_asserts rather than returned results.
#[derive(Debug, Default)]
pub struct Observer {
    phases: u32,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `floor` is the clock value the phase started at; queues never
    /// interleave, so no job may start before it.
    pub fn observe_queue(&mut self, queue: &[JobRun], floor: Ticks) {
        self.phases += 1;

        let mut intervals: Vec<(Ticks, Ticks)> = Vec::with_capacity(queue.len());
        for job in queue {
            let (start, completion) = match (job.start, job.completion) {
                (Some(start), Some(completion)) => (start, completion),
                _ => {
                    debug_assert!(
                        false,
                        "job {} left unscheduled after phase {}",
                        job.spec.id, self.phases
                    );
                    continue;
                }
            };
            debug_assert!(
                start >= job.spec.arrival,
                "job {} started at {start} before its arrival {}",
                job.spec.id,
                job.spec.arrival
            );
            debug_assert!(
                start >= floor,
                "job {} started at {start} before the phase floor {floor}",
                job.spec.id
            );
            debug_assert_eq!(
                completion,
                start + job.spec.burst,
                "job {} completion is not start + burst",
                job.spec.id
            );
            intervals.push((start, completion));
        }

        // One server per queue: service intervals must be disjoint
        intervals.sort_unstable();
        for pair in intervals.windows(2) {
            debug_assert!(
                pair[0].1 <= pair[1].0,
                "overlapping service intervals {:?} and {:?} on one server",
                pair[0],
                pair[1]
            );
        }
    }
}
