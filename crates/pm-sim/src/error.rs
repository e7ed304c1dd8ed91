use pm_model::ModelError;
use pm_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match grid length {expected}")]
    GridMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
