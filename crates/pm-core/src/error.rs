//! Framework error type.
//!
//! Sub-crates define their own error enums (`ScheduleError`, `ModelError`,
//! `SimError`, `OutputError`); `PmError` only covers the primitives that
//! live in this crate.

use thiserror::Error;

/// Errors raised by `pm-core` primitives.
#[derive(Debug, Error)]
pub enum PmError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `pm-core`.
pub type PmResult<T> = Result<T, PmError>;
