use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("total duration must be positive and finite, got {0} s")]
    InvalidTotalDuration(f64),

    #[error("cycle entry {index} has invalid duration {seconds} s")]
    InvalidEntryDuration { index: usize, seconds: f64 },

    #[error("cycle has no entries")]
    EmptyCycle,

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
