//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `component_traces.csv`
//! - `component_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, SummaryRow, TraceRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    traces:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut traces = Writer::from_path(dir.join("component_traces.csv"))?;
        traces.write_record(["component", "time_secs", "power_mw", "data_bytes"])?;

        let mut summaries = Writer::from_path(dir.join("component_summaries.csv"))?;
        summaries.write_record([
            "component",
            "peak_power_mw",
            "avg_power_mw",
            "total_data_bytes",
        ])?;

        Ok(Self {
            traces,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace_rows(&mut self, rows: &[TraceRow]) -> OutputResult<()> {
        for row in rows {
            self.traces.write_record(&[
                row.component.clone(),
                row.time_secs.to_string(),
                row.power_mw.to_string(),
                row.data_bytes.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.component.clone(),
            row.peak_power_mw.to_string(),
            row.avg_power_mw.to_string(),
            row.total_data_bytes.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.traces.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
