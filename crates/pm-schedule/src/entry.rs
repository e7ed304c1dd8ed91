//! Core schedule types: `ModeEntry` and `Cycle`.
//!
//! A `Cycle` is the repeating unit of a component's operating schedule: an
//! ordered list of named modes with durations.  The config payload `C` is
//! whatever the component model needs to price the mode (register settings,
//! averaging counts, radio parameters); this crate never inspects it.

use crate::{ScheduleError, ScheduleResult};

// ── ModeEntry ─────────────────────────────────────────────────────────────────

/// One entry in a component's operating cycle.
///
/// `mode` is the human-readable mode name (e.g. `CONTINUOUS_CONVERSION`);
/// the component model keys its power formula off `config`, not the name.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeEntry<C> {
    /// Mode name, used in output rows and error messages.
    pub mode: String,

    /// How long this mode runs per cycle, in seconds.  Must be positive.
    pub duration_secs: f64,

    /// Component-specific configuration for this mode.
    pub config: C,

    /// Seconds between samples while in this mode.  `None` means the
    /// component's default (1 s) applies.
    pub sample_period_secs: Option<f64>,
}

impl<C> ModeEntry<C> {
    pub fn new(mode: impl Into<String>, duration_secs: f64, config: C) -> Self {
        Self {
            mode: mode.into(),
            duration_secs,
            config,
            sample_period_secs: None,
        }
    }

    /// Builder-style sample period override.
    pub fn with_sample_period(mut self, secs: f64) -> Self {
        self.sample_period_secs = Some(secs);
        self
    }
}

// ── Cycle ─────────────────────────────────────────────────────────────────────

/// A repeating operating schedule for one component.
///
/// Entries run in order; after the last entry the cycle restarts.  Entry
/// durations are validated by [`Cycle::check`] (called by
/// [`expand`][crate::expand], so a malformed cycle cannot silently produce
/// malformed intervals).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle<C> {
    entries: Vec<ModeEntry<C>>,
}

impl<C> Cycle<C> {
    pub fn new(entries: Vec<ModeEntry<C>>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Read-only slice of all entries, in cycle order.
    pub fn entries(&self) -> &[ModeEntry<C>] {
        &self.entries
    }

    /// Sum of entry durations — the repeat period in seconds.
    pub fn period_secs(&self) -> f64 {
        self.entries.iter().map(|e| e.duration_secs).sum()
    }

    /// Validate the cycle: non-empty, all durations positive and finite.
    pub fn check(&self) -> ScheduleResult<()> {
        if self.entries.is_empty() {
            return Err(ScheduleError::EmptyCycle);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            let seconds = entry.duration_secs;
            if !seconds.is_finite() || seconds <= 0.0 {
                return Err(ScheduleError::InvalidEntryDuration { index, seconds });
            }
        }
        Ok(())
    }
}
