//! The simulation loop: one component, one cycle, one grid.

use pm_core::TimeGrid;
use pm_model::{PowerModel, DEFAULT_SAMPLE_PERIOD_SECS};
use pm_schedule::Cycle;

use crate::trace::ComponentTrace;
use crate::SimResult;

/// Run one component's cycle over a grid.
///
/// Every entry's config is validated up front, so a bad mode fails the run
/// before any series is produced rather than partway through.  The cycle is
/// then expanded to absolute intervals and each sample is priced from the
/// interval covering it:
///
/// - `power_mw[i]` is the model's average draw for the interval's config
///   and sample period;
/// - `data_bytes[i]` accumulates `rate × step` per sample, so the data
///   series is cumulative from t = 0 and carries across interval
///   boundaries (a transmit interval with a negative rate drains it).
pub fn run_component<M: PowerModel>(
    model: &M,
    cycle: &Cycle<M::Config>,
    grid: &TimeGrid,
) -> SimResult<ComponentTrace> {
    for entry in cycle.entries() {
        model.validate(&entry.config)?;
    }

    let intervals = cycle.expand(grid.duration_secs)?;

    let len = grid.len();
    let mut power_mw = vec![0.0; len];
    let mut data_bytes = vec![0.0; len];
    let mut accumulated = 0.0_f64;

    // Intervals tile [0, duration) contiguously, so each sample index is
    // visited exactly once.
    for interval in &intervals {
        let period = interval
            .sample_period_secs
            .unwrap_or(DEFAULT_SAMPLE_PERIOD_SECS);
        let mw = model.power_mw(&interval.config, period)?;
        let rate = model.data_rate(&interval.config, period)?;

        let start = grid.index_of(interval.start_secs);
        let end = grid.index_of(interval.end_secs).min(len);
        for i in start..end {
            power_mw[i] = mw;
            accumulated += rate * grid.step_secs;
            data_bytes[i] = accumulated;
        }
    }

    Ok(ComponentTrace {
        name: model.name().to_string(),
        power_mw,
        data_bytes,
    })
}
