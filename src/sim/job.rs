use std::collections::HashSet;

use serde::Deserialize;

use crate::error::{MlqError, Result};

pub type Ticks = u64;

/// Priority class a job is pinned to for its whole lifetime. Jobs never move
/// between levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueLevel {
    High,
    Medium,
    Low,
}

impl QueueLevel {
    /// Loose classification: 1 is High, 2 is Medium, everything else falls
    /// through to Low.
    pub fn from_tag(tag: i64) -> Self {
        match tag {
            1 => QueueLevel::High,
            2 => QueueLevel::Medium,
            _ => QueueLevel::Low,
        }
    }
}

/// Unvalidated job descriptor as handed over by a front end.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJob {
    pub id: String,
    pub arrival: i64,
    pub burst: i64,
    pub queue: i64,
}

/// Validated, immutable job descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub id: String,
    pub arrival: Ticks,
    pub burst: Ticks,
    pub level: QueueLevel,
}

impl JobSpec {
    pub fn new(id: impl Into<String>, arrival: Ticks, burst: Ticks, level: QueueLevel) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            level,
        }
    }

    /// Validate one descriptor. Out-of-range queue tags are rejected here even
    /// though classification itself would fall back to Low; a batch that
    /// passes validation never exercises that default.
    pub fn from_raw(raw: RawJob) -> Result<Self> {
        if raw.id.is_empty() {
            return Err(MlqError::EmptyId);
        }
        if raw.arrival < 0 {
            return Err(MlqError::InvalidArrival {
                id: raw.id,
                arrival: raw.arrival,
            });
        }
        if raw.burst <= 0 {
            return Err(MlqError::InvalidBurst {
                id: raw.id,
                burst: raw.burst,
            });
        }
        if !(1..=3).contains(&raw.queue) {
            return Err(MlqError::InvalidQueueLevel {
                id: raw.id,
                level: raw.queue,
            });
        }
        Ok(Self {
            id: raw.id,
            arrival: raw.arrival as Ticks,
            burst: raw.burst as Ticks,
            level: QueueLevel::from_tag(raw.queue),
        })
    }
}

/// Validate a whole batch, fail closed: one bad record rejects everything,
/// since partial metrics over a corrupted job set are misleading.
pub fn ingest(raws: Vec<RawJob>) -> Result<Vec<JobSpec>> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(raws.len());
    for raw in raws {
        let spec = JobSpec::from_raw(raw)?;
        if !seen.insert(spec.id.clone()) {
            return Err(MlqError::DuplicateId(spec.id));
        }
        jobs.push(spec);
    }
    Ok(jobs)
}

/// One job's schedule-relevant state. `start` stays `None` until the owning
/// queue's discipline runs the job; `completion` is always `start + burst`
/// once set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRun {
    pub spec: JobSpec,
    pub start: Option<Ticks>,
    pub completion: Option<Ticks>,
}

impl JobRun {
    pub fn new(spec: JobSpec) -> Self {
        Self {
            spec,
            start: None,
            completion: None,
        }
    }

    pub fn started(&self) -> bool {
        self.start.is_some()
    }
}
