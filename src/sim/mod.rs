pub mod classify;
pub mod driver;
pub mod job;
pub mod observer;

pub use classify::{partition, LevelQueues};
pub use driver::{MlqSim, Schedule};
pub use job::{ingest, JobRun, JobSpec, QueueLevel, RawJob, Ticks};
