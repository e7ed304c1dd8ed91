//! The schedule expander: `Cycle` → absolute-time `ActiveInterval` list.
//!
//! # Expansion model
//!
//! The cycle is walked repeatedly from its start, emitting one interval per
//! entry, until the next entry would overrun the requested total.  The tail
//! is then squared up so the intervals tile `[0, total)` exactly:
//!
//! - nothing fit (first entry longer than the total) → a single interval of
//!   the first entry, clipped to the total;
//! - last interval ends short → one padding interval of the next entry in
//!   sequence (`emitted % cycle_len`), carrying that entry's full config;
//! - last interval overruns (floating-point accumulation only — the walk
//!   itself never emits past the total) → its end is clipped.
//!
//! Post-conditions, relied on by `pm-sim`:
//! intervals are contiguous and non-overlapping, the first starts at 0, and
//! the last ends at exactly `total_secs`.

use crate::entry::{Cycle, ModeEntry};
use crate::ScheduleError;
use crate::ScheduleResult;

// ── ActiveInterval ────────────────────────────────────────────────────────────

/// A time span during which one mode is in effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveInterval<C> {
    pub start_secs: f64,
    pub end_secs: f64,
    /// Mode name copied from the originating entry.
    pub mode: String,
    /// Config copied from the originating entry.
    pub config: C,
    /// Sample period copied from the originating entry.
    pub sample_period_secs: Option<f64>,
}

impl<C> ActiveInterval<C> {
    #[inline]
    pub fn duration_secs(&self) -> f64 {
        self.end_secs - self.start_secs
    }
}

impl<C: Clone> ActiveInterval<C> {
    fn from_entry(start_secs: f64, end_secs: f64, entry: &ModeEntry<C>) -> Self {
        Self {
            start_secs,
            end_secs,
            mode: entry.mode.clone(),
            config: entry.config.clone(),
            sample_period_secs: entry.sample_period_secs,
        }
    }
}

// ── Expansion ─────────────────────────────────────────────────────────────────

impl<C: Clone> Cycle<C> {
    /// Unroll this cycle over `[0, total_secs)`.
    ///
    /// Fails fast on a non-positive or non-finite total
    /// ([`ScheduleError::InvalidTotalDuration`]) and on any malformed entry
    /// (via [`Cycle::check`]) before emitting anything.
    pub fn expand(&self, total_secs: f64) -> ScheduleResult<Vec<ActiveInterval<C>>> {
        if !total_secs.is_finite() || total_secs <= 0.0 {
            return Err(ScheduleError::InvalidTotalDuration(total_secs));
        }
        self.check()?;

        let entries = self.entries();
        let mut intervals: Vec<ActiveInterval<C>> = Vec::new();
        let mut now = 0.0_f64;

        'walk: loop {
            for entry in entries {
                if now + entry.duration_secs > total_secs {
                    break 'walk;
                }
                intervals.push(ActiveInterval::from_entry(
                    now,
                    now + entry.duration_secs,
                    entry,
                ));
                now += entry.duration_secs;
            }
        }

        // ── Square up the tail ────────────────────────────────────────────
        if intervals.is_empty() {
            // First entry alone overruns the total: clip it rather than
            // indexing off an empty list.
            intervals.push(ActiveInterval::from_entry(0.0, total_secs, &entries[0]));
            return Ok(intervals);
        }

        let next = &entries[intervals.len() % entries.len()];
        let last_end = intervals.last().map(|iv| iv.end_secs).unwrap_or(0.0);

        if last_end > total_secs {
            // Accumulated rounding pushed the last interval past the total.
            if let Some(iv) = intervals.last_mut() {
                iv.end_secs = total_secs;
            }
        } else if last_end < total_secs {
            intervals.push(ActiveInterval::from_entry(last_end, total_secs, next));
        }

        Ok(intervals)
    }
}
