//! Downlink data-budget check.

use pm_core::TimeGrid;

/// First sample at which a cumulative data series outran its budget.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BudgetViolation {
    pub time_secs: f64,
    /// Data held at that sample, bytes.
    pub bytes: f64,
    /// What the budget allowed by then, bytes.
    pub allowed_bytes: f64,
}

/// A flat bytes-per-second allowance against which a payload's cumulative
/// data is checked.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DataBudget {
    pub limit_bytes_per_sec: f64,
}

impl DataBudget {
    pub fn new(limit_bytes_per_sec: f64) -> Self {
        Self { limit_bytes_per_sec }
    }

    /// Bytes allowed by the end of the sample at `t_secs`.
    ///
    /// The sample covers `[t, t + step)`, so its allowance includes the
    /// step it spans.
    pub fn allowed_bytes(&self, t_secs: f64, step_secs: f64) -> f64 {
        self.limit_bytes_per_sec * (t_secs + step_secs)
    }

    /// Check a cumulative data series against the budget.
    ///
    /// Returns the first violating sample, or `None` when the whole series
    /// fits.
    pub fn check(&self, grid: &TimeGrid, cumulative_bytes: &[f64]) -> Option<BudgetViolation> {
        cumulative_bytes.iter().enumerate().find_map(|(i, &bytes)| {
            let time_secs = grid.sample_secs(i);
            let allowed = self.allowed_bytes(time_secs, grid.step_secs);
            (bytes > allowed).then_some(BudgetViolation {
                time_secs,
                bytes,
                allowed_bytes: allowed,
            })
        })
    }
}
