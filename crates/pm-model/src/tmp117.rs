//! TMP117 digital temperature sensor.
//!
//! Duty-cycle current model: in continuous-conversion mode the part
//! alternates between an active conversion window (`averages ×
//! 15.5 ms`) and standby for the rest of the conversion cycle; in
//! one-shot mode it converts once per sample period and shuts down in
//! between.  Averaging constrains which conversion-cycle times are
//! reachable (datasheet table 7-7).

use pm_core::ua_to_mw;

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "TMP117";

const VOLTAGE_V: f64 = 3.3;
const CONVERSION_SECS: f64 = 0.0155;
const ACTIVE_UA: f64 = 135.0;
const STANDBY_UA: f64 = 1.25;
const SHUTDOWN_UA: f64 = 0.15;
/// 2 bytes of temperature data + 4 bytes of timestamp per read.
const READ_BYTES: f64 = 6.0;

const AVERAGES_OPTIONS: [u32; 4] = [0, 8, 32, 64];
const CYCLE_OPTIONS: [f64; 8] = [0.0155, 0.125, 0.25, 0.5, 1.0, 4.0, 8.0, 16.0];

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tmp117Mode {
    ContinuousConversion,
    OneShot,
    Shutdown,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tmp117Config {
    pub mode: Tmp117Mode,
    /// Conversions averaged per output sample (0 disables averaging).
    pub averages: u32,
    /// Conversion cycle time in seconds (continuous mode only).
    pub conv_cycle_secs: f64,
}

impl Tmp117Config {
    pub fn continuous(averages: u32, conv_cycle_secs: f64) -> Self {
        Self {
            mode: Tmp117Mode::ContinuousConversion,
            averages,
            conv_cycle_secs,
        }
    }

    pub fn one_shot(averages: u32) -> Self {
        Self {
            mode: Tmp117Mode::OneShot,
            averages,
            conv_cycle_secs: CONVERSION_SECS,
        }
    }

    pub fn shutdown() -> Self {
        Self {
            mode: Tmp117Mode::Shutdown,
            averages: 0,
            conv_cycle_secs: 0.0,
        }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

/// TMP117 model value.  Holds the legal-configuration tables so callers
/// can validate without reaching for globals.
#[derive(Clone, Debug, Default)]
pub struct Tmp117;

impl Tmp117 {
    pub fn new() -> Self {
        Self
    }

    /// Conversion-cycle times reachable at a given averaging setting.
    ///
    /// Heavier averaging needs a longer active window, which rules out the
    /// short cycle times.
    fn cycle_options_for(averages: u32) -> Option<&'static [f64]> {
        match averages {
            0 => Some(&CYCLE_OPTIONS[0..]),
            8 => Some(&CYCLE_OPTIONS[1..]),
            32 => Some(&CYCLE_OPTIONS[3..]),
            64 => Some(&CYCLE_OPTIONS[4..]),
            _ => None,
        }
    }

    /// Active conversion window for one output sample.
    fn active_window_secs(averages: u32) -> f64 {
        if averages == 0 {
            CONVERSION_SECS
        } else {
            averages as f64 * CONVERSION_SECS
        }
    }
}

impl PowerModel for Tmp117 {
    type Config = Tmp117Config;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, config: &Self::Config) -> ModelResult<()> {
        match config.mode {
            Tmp117Mode::ContinuousConversion => {
                let allowed = Self::cycle_options_for(config.averages).ok_or_else(|| {
                    ModelError::invalid(
                        NAME,
                        format!(
                            "averaging {} not in {AVERAGES_OPTIONS:?}",
                            config.averages
                        ),
                    )
                })?;
                if !allowed.contains(&config.conv_cycle_secs) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!(
                            "conversion cycle {} s unreachable at averaging {} \
                             (allowed: {allowed:?})",
                            config.conv_cycle_secs, config.averages
                        ),
                    ));
                }
                Ok(())
            }
            Tmp117Mode::OneShot => {
                if !AVERAGES_OPTIONS.contains(&config.averages) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!(
                            "averaging {} not in {AVERAGES_OPTIONS:?}",
                            config.averages
                        ),
                    ));
                }
                if config.conv_cycle_secs != CONVERSION_SECS {
                    return Err(ModelError::invalid(
                        NAME,
                        format!(
                            "one-shot conversion cycle must be {CONVERSION_SECS} s, \
                             got {}",
                            config.conv_cycle_secs
                        ),
                    ));
                }
                Ok(())
            }
            Tmp117Mode::Shutdown => {
                if config.averages != 0 || config.conv_cycle_secs != 0.0 {
                    return Err(ModelError::invalid(
                        NAME,
                        "shutdown takes no averaging or cycle time",
                    ));
                }
                Ok(())
            }
        }
    }

    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        let active_secs = Self::active_window_secs(config.averages);

        let avg_current_ua = match config.mode {
            Tmp117Mode::ContinuousConversion => {
                // If the active window fills the whole cycle the part never
                // reaches standby: 100 % duty at active current.
                let cycle_secs = config.conv_cycle_secs.max(active_secs);
                let standby_secs = cycle_secs - active_secs;
                (ACTIVE_UA * active_secs + STANDBY_UA * standby_secs) / cycle_secs
            }
            Tmp117Mode::OneShot => {
                if active_secs >= sample_period_secs {
                    return Err(ModelError::SamplePeriodTooShort {
                        component: NAME,
                        needed_secs: active_secs,
                        got_secs: sample_period_secs,
                    });
                }
                let shutdown_secs = sample_period_secs - active_secs;
                (ACTIVE_UA * active_secs + SHUTDOWN_UA * shutdown_secs) / sample_period_secs
            }
            Tmp117Mode::Shutdown => SHUTDOWN_UA,
        };

        Ok(ua_to_mw(avg_current_ua, VOLTAGE_V))
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        match config.mode {
            Tmp117Mode::Shutdown => Ok(0.0),
            _ => Ok(READ_BYTES / sample_period_secs),
        }
    }
}
