//! The `OutputWriter` trait implemented by all backend writers, and the
//! driver that renders a whole `TraceSet` through one.

use pm_core::TimeGrid;
use pm_sim::{ComponentTrace, TraceSet};

use crate::{OutputResult, SummaryRow, TraceRow};

/// Trait implemented by output backends.
pub trait OutputWriter {
    /// Write a batch of trace samples.
    fn write_trace_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()>;

    /// Write one component summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Name used for the summed pseudo-component rows.
pub const TOTAL_COMPONENT: &str = "TOTAL";

/// Render every component of `traces`, then the payload total, through
/// `writer`, and finish it.
pub fn write_trace_set<W: OutputWriter>(writer: &mut W, traces: &TraceSet) -> OutputResult<()> {
    let grid = traces.grid();

    for trace in traces.traces() {
        write_component(writer, &grid, trace)?;
    }

    let total = ComponentTrace {
        name: TOTAL_COMPONENT.to_string(),
        power_mw: traces.total_power_mw(),
        data_bytes: traces.total_data_bytes(),
    };
    write_component(writer, &grid, &total)?;

    writer.finish()
}

fn write_component<W: OutputWriter>(
    writer: &mut W,
    grid: &TimeGrid,
    trace: &ComponentTrace,
) -> OutputResult<()> {
    let rows: Vec<TraceRow> = trace
        .power_mw
        .iter()
        .zip(&trace.data_bytes)
        .enumerate()
        .map(|(i, (&power_mw, &data_bytes))| TraceRow {
            component: trace.name.clone(),
            time_secs: grid.sample_secs(i),
            power_mw,
            data_bytes,
        })
        .collect();
    writer.write_trace_rows(&rows)?;

    writer.write_summary(&SummaryRow {
        component: trace.name.clone(),
        peak_power_mw: trace.peak_power_mw(),
        avg_power_mw: trace.avg_power_mw(),
        total_data_bytes: trace.final_data_bytes(),
    })
}
