//! Per-component simulation results.
//!
//! A [`ComponentTrace`] holds the two series a run produces for one
//! component: instantaneous power per sample and cumulative data held since
//! t = 0.  Both are aligned to the same [`TimeGrid`].  A [`TraceSet`]
//! collects the traces of a payload and guards that every component was run
//! on the same grid before anything is summed or written out.

use pm_core::TimeGrid;

use crate::{SimError, SimResult};

// ── ComponentTrace ────────────────────────────────────────────────────────────

/// Power and data series for one component over a grid.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentTrace {
    /// Component name, as reported by its model.
    pub name: String,
    /// Instantaneous power draw per sample, mW.
    pub power_mw: Vec<f64>,
    /// Cumulative data held per sample, bytes.  Non-monotonic when a radio
    /// transmit mode drains the budget.
    pub data_bytes: Vec<f64>,
}

impl ComponentTrace {
    pub fn len(&self) -> usize {
        self.power_mw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.power_mw.is_empty()
    }

    /// Largest instantaneous draw, mW.
    pub fn peak_power_mw(&self) -> f64 {
        self.power_mw.iter().copied().fold(0.0, f64::max)
    }

    /// Mean draw over the run, mW.
    pub fn avg_power_mw(&self) -> f64 {
        if self.power_mw.is_empty() {
            0.0
        } else {
            self.power_mw.iter().sum::<f64>() / self.power_mw.len() as f64
        }
    }

    /// Data held at the end of the run, bytes.
    pub fn final_data_bytes(&self) -> f64 {
        self.data_bytes.last().copied().unwrap_or(0.0)
    }
}

// ── TraceSet ──────────────────────────────────────────────────────────────────

/// The traces of a full payload, all on one grid.
#[derive(Clone, Debug)]
pub struct TraceSet {
    grid:   TimeGrid,
    traces: Vec<ComponentTrace>,
}

impl TraceSet {
    pub fn new(grid: TimeGrid) -> Self {
        Self { grid, traces: Vec::new() }
    }

    pub fn grid(&self) -> TimeGrid {
        self.grid
    }

    pub fn traces(&self) -> &[ComponentTrace] {
        &self.traces
    }

    /// Add a trace, rejecting one whose series do not match the grid.
    pub fn push(&mut self, trace: ComponentTrace) -> SimResult<()> {
        let expected = self.grid.len();
        if trace.power_mw.len() != expected {
            return Err(SimError::GridMismatch {
                expected,
                got: trace.power_mw.len(),
                what: "power series",
            });
        }
        if trace.data_bytes.len() != expected {
            return Err(SimError::GridMismatch {
                expected,
                got: trace.data_bytes.len(),
                what: "data series",
            });
        }
        self.traces.push(trace);
        Ok(())
    }

    /// Element-wise sum of all power series, mW.
    pub fn total_power_mw(&self) -> Vec<f64> {
        self.sum_series(|t| &t.power_mw)
    }

    /// Element-wise sum of all cumulative data series, bytes.
    pub fn total_data_bytes(&self) -> Vec<f64> {
        self.sum_series(|t| &t.data_bytes)
    }

    fn sum_series<'a>(&'a self, series: impl Fn(&'a ComponentTrace) -> &'a Vec<f64>) -> Vec<f64> {
        let mut total = vec![0.0; self.grid.len()];
        for trace in &self.traces {
            for (acc, v) in total.iter_mut().zip(series(trace)) {
                *acc += v;
            }
        }
        total
    }
}
