pub mod fcfs;
pub mod sjf;

use crate::sim::job::{JobRun, Ticks};

pub use fcfs::FcfsScheduler;
pub use sjf::SjfScheduler;

/// A non-preemptive discipline over one arrival-sorted queue.
///
/// Implementations set `start` and `completion` on every job in the queue and
/// return the clock after the last job finished. An empty queue leaves the
/// clock untouched. Each queue owns a single server, so the produced
/// `[start, completion)` intervals never overlap.
pub trait QueueDiscipline {
    fn run(&self, queue: &mut [JobRun], clock: Ticks) -> Ticks;
}
