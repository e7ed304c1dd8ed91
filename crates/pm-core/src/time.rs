//! Simulation time model.
//!
//! # Design
//!
//! Power and data series are sampled on a uniform grid: sample `i` sits at
//! `i * step_secs`, and the grid covers `[0, duration_secs)` half-open, so
//! a grid and the schedule intervals laid over it agree on where a mode
//! ends and the next begins.
//!
//! Durations are `f64` seconds rather than an integer tick: datasheet
//! conversion times go down to 15.5 ms while mission schedules run for
//! hours, and mode durations (e.g. a 0.0155 s one-shot window) do not share
//! a convenient common divisor.  All index math truncates toward zero, which
//! matches the half-open interval convention.

use std::fmt;

use crate::{PmError, PmResult};

// ── TimeGrid ──────────────────────────────────────────────────────────────────

/// A uniform sample grid over `[0, duration_secs)`.
///
/// Cheap to copy; holds no heap data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeGrid {
    /// Seconds between consecutive samples.
    pub step_secs: f64,
    /// Total simulated span in seconds (exclusive upper bound of the grid).
    pub duration_secs: f64,
}

impl TimeGrid {
    /// Create a grid, rejecting non-positive or non-finite parameters.
    pub fn new(step_secs: f64, duration_secs: f64) -> PmResult<Self> {
        if !step_secs.is_finite() || step_secs <= 0.0 {
            return Err(PmError::Config(format!(
                "grid step must be positive and finite, got {step_secs}"
            )));
        }
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(PmError::Config(format!(
                "grid duration must be positive and finite, got {duration_secs}"
            )));
        }
        Ok(Self { step_secs, duration_secs })
    }

    /// Number of samples in the grid: `ceil(duration / step)`.
    ///
    /// An exact multiple excludes the endpoint (samples cover
    /// `[0, duration)`), so `duration = 10, step = 1` gives 10 samples at
    /// 0..=9 seconds.
    #[inline]
    pub fn len(&self) -> usize {
        (self.duration_secs / self.step_secs).ceil() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time in seconds of sample `i`.
    #[inline]
    pub fn sample_secs(&self, i: usize) -> f64 {
        i as f64 * self.step_secs
    }

    /// Index of the sample containing time `t_secs`, clamped to the grid.
    #[inline]
    pub fn index_of(&self, t_secs: f64) -> usize {
        let idx = (t_secs / self.step_secs) as usize;
        idx.min(self.len())
    }

    /// Materialize the sample times (useful for output rows and tests).
    pub fn samples(&self) -> Vec<f64> {
        (0..self.len()).map(|i| self.sample_secs(i)).collect()
    }
}

impl fmt::Display for TimeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} samples @ {} s over {} s",
            self.len(),
            self.step_secs,
            self.duration_secs
        )
    }
}
