//! CSV cycle loader.
//!
//! # CSV format
//!
//! One row per mode entry, in cycle order:
//!
//! ```csv
//! mode,duration_secs,config,sample_period_secs
//! CONTINUOUS_CONVERSION,10,cc:8:0.125,1
//! SHUTDOWN,20,sd,
//! ```
//!
//! The `config` column is opaque to this crate: the caller supplies a
//! parser closure mapping the string to the component's config type.  An
//! empty `sample_period_secs` means "component default".

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::entry::{Cycle, ModeEntry};
use crate::ScheduleError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CycleRecord {
    mode: String,
    duration_secs: f64,
    config: String,
    sample_period_secs: Option<f64>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load one component's [`Cycle`] from a CSV file.
///
/// `parse_config` maps the `config` column to the component's config type;
/// its errors surface as [`ScheduleError::Parse`].
pub fn load_cycle_csv<C>(
    path: &Path,
    parse_config: impl Fn(&str) -> Result<C, ScheduleError>,
) -> Result<Cycle<C>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_cycle_reader(file, parse_config)
}

/// Like [`load_cycle_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded schedule
/// strings.
pub fn load_cycle_reader<R: Read, C>(
    reader: R,
    parse_config: impl Fn(&str) -> Result<C, ScheduleError>,
) -> Result<Cycle<C>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries: Vec<ModeEntry<C>> = Vec::new();

    for result in csv_reader.deserialize::<CycleRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        entries.push(ModeEntry {
            mode: row.mode,
            duration_secs: row.duration_secs,
            config: parse_config(row.config.trim())?,
            sample_period_secs: row.sample_period_secs,
        });
    }

    let cycle = Cycle::new(entries);
    cycle.check()?;
    Ok(cycle)
}
