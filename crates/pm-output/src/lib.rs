//! `pm-output` — simulation output writers for the rust_pm workspace.
//!
//! The CSV backend creates two files in a target directory:
//!
//! | File                      | Columns                                                 |
//! |---------------------------|---------------------------------------------------------|
//! | `component_traces.csv`    | `component, time_secs, power_mw, data_bytes`            |
//! | `component_summaries.csv` | `component, peak_power_mw, avg_power_mw, total_data_bytes` |
//!
//! Backends implement [`OutputWriter`]; [`write_trace_set`] drives a whole
//! `TraceSet` through one (every component, then a `TOTAL` pseudo-component
//! with the summed series).
//!
//! # Usage
//!
//! ```rust,ignore
//! use pm_output::{write_trace_set, CsvWriter};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! write_trace_set(&mut writer, &traces)?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{SummaryRow, TraceRow};
pub use writer::{write_trace_set, OutputWriter, TOTAL_COMPONENT};
