pub mod error;
pub mod metrics;
pub mod scheduler;
pub mod sim;

pub use error::{MlqError, Result};
pub use metrics::{report, JobMetrics, MetricsReport};
pub use scheduler::QueueDiscipline;
pub use sim::{ingest, JobRun, JobSpec, MlqSim, QueueLevel, RawJob, Schedule, Ticks};
