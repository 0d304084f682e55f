use thiserror::Error;

#[derive(Error, Debug)]
pub enum MlqError {
    #[error("job {id}: negative arrival time {arrival}")]
    InvalidArrival { id: String, arrival: i64 },

    #[error("job {id}: burst time {burst} must be positive")]
    InvalidBurst { id: String, burst: i64 },

    #[error("job {id}: queue level {level} outside 1..=3")]
    InvalidQueueLevel { id: String, level: i64 },

    #[error("job with empty identifier")]
    EmptyId,

    #[error("duplicate job identifier {0}")]
    DuplicateId(String),
}

pub type Result<T> = std::result::Result<T, MlqError>;
