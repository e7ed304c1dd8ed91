//! BM1422 3-axis magnetometer.
//!
//! Same duty-cycle shape as the TMP117: an active measurement window of
//! `averages × 0.5 ms` per output sample, standby in between.  Continuous
//! mode paces itself at the configured output rate; single mode converts
//! once per requested sample period.
//!
//! The model carries two current tables: the nominal datasheet figures and
//! a conservative 2× set used for mission-margin estimates.  The default
//! constructor is conservative; use [`Bm1422::nominal`] for datasheet
//! numbers.

use pm_core::ua_to_mw;

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "BM1422";

const VOLTAGE_V: f64 = 3.3;
const MEASUREMENT_SECS: f64 = 0.0005;
const ACTIVE_UA: f64 = 150.0;
const STANDBY_UA: f64 = 1.5;
const ACTIVE_CONSERVATIVE_UA: f64 = 300.0;
const STANDBY_CONSERVATIVE_UA: f64 = 5.0;
/// 5 bytes of field data + 4 bytes of timestamp per read.
const READ_BYTES: f64 = 9.0;

const AVERAGES_OPTIONS: [u32; 5] = [1, 2, 4, 8, 16];
const FREQ_OPTIONS_HZ: [f64; 4] = [10.0, 20.0, 100.0, 1000.0];

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bm1422Mode {
    Continuous,
    Single,
    PowerDown,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bm1422Config {
    pub mode: Bm1422Mode,
    /// Output data rate in Hz (continuous mode only).
    pub sample_freq_hz: f64,
    /// Measurements averaged per output sample.
    pub averages: u32,
}

impl Bm1422Config {
    pub fn continuous(sample_freq_hz: f64, averages: u32) -> Self {
        Self {
            mode: Bm1422Mode::Continuous,
            sample_freq_hz,
            averages,
        }
    }

    pub fn single(averages: u32) -> Self {
        Self {
            mode: Bm1422Mode::Single,
            sample_freq_hz: 1000.0,
            averages,
        }
    }

    pub fn power_down() -> Self {
        Self {
            mode: Bm1422Mode::PowerDown,
            sample_freq_hz: 0.0,
            averages: 0,
        }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bm1422 {
    conservative: bool,
}

impl Bm1422 {
    /// Conservative (2× current) model — the mission-planning default.
    pub fn new() -> Self {
        Self { conservative: true }
    }

    /// Nominal datasheet currents.
    pub fn nominal() -> Self {
        Self { conservative: false }
    }

    fn currents_ua(&self) -> (f64, f64) {
        if self.conservative {
            (ACTIVE_CONSERVATIVE_UA, STANDBY_CONSERVATIVE_UA)
        } else {
            (ACTIVE_UA, STANDBY_UA)
        }
    }

    /// Output rates reachable at a given averaging setting: heavy averaging
    /// cannot keep up with the 1 kHz rate.
    fn freq_options_for(averages: u32) -> Option<&'static [f64]> {
        match averages {
            1 | 2 => Some(&FREQ_OPTIONS_HZ[..]),
            4 | 8 | 16 => Some(&FREQ_OPTIONS_HZ[..3]),
            _ => None,
        }
    }
}

impl Default for Bm1422 {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerModel for Bm1422 {
    type Config = Bm1422Config;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, config: &Self::Config) -> ModelResult<()> {
        match config.mode {
            Bm1422Mode::Continuous => {
                let allowed = Self::freq_options_for(config.averages).ok_or_else(|| {
                    ModelError::invalid(
                        NAME,
                        format!("averaging {} not in {AVERAGES_OPTIONS:?}", config.averages),
                    )
                })?;
                if !allowed.contains(&config.sample_freq_hz) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!(
                            "output rate {} Hz unreachable at averaging {} \
                             (allowed: {allowed:?})",
                            config.sample_freq_hz, config.averages
                        ),
                    ));
                }
                Ok(())
            }
            Bm1422Mode::Single => {
                if !AVERAGES_OPTIONS.contains(&config.averages) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("averaging {} not in {AVERAGES_OPTIONS:?}", config.averages),
                    ));
                }
                if config.sample_freq_hz != 1000.0 {
                    return Err(ModelError::invalid(
                        NAME,
                        "single mode runs the converter at its full 1000 Hz rate",
                    ));
                }
                Ok(())
            }
            Bm1422Mode::PowerDown => {
                if config.sample_freq_hz != 0.0 || config.averages != 0 {
                    return Err(ModelError::invalid(
                        NAME,
                        "power-down takes no output rate or averaging",
                    ));
                }
                Ok(())
            }
        }
    }

    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        let (active_ua, standby_ua) = self.currents_ua();
        let active_secs = config.averages as f64 * MEASUREMENT_SECS;

        let avg_current_ua = match config.mode {
            Bm1422Mode::Continuous => {
                let frame_secs = 1.0 / config.sample_freq_hz;
                if active_secs >= frame_secs {
                    return Err(ModelError::SamplePeriodTooShort {
                        component: NAME,
                        needed_secs: active_secs,
                        got_secs: frame_secs,
                    });
                }
                let standby_secs = frame_secs - active_secs;
                (active_ua * active_secs + standby_ua * standby_secs) * config.sample_freq_hz
            }
            Bm1422Mode::Single => {
                if active_secs >= sample_period_secs {
                    return Err(ModelError::SamplePeriodTooShort {
                        component: NAME,
                        needed_secs: active_secs,
                        got_secs: sample_period_secs,
                    });
                }
                let standby_secs = sample_period_secs - active_secs;
                (active_ua * active_secs + standby_ua * standby_secs) / sample_period_secs
            }
            Bm1422Mode::PowerDown => standby_ua,
        };

        Ok(ua_to_mw(avg_current_ua, VOLTAGE_V))
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        match config.mode {
            Bm1422Mode::PowerDown => Ok(0.0),
            _ => Ok(READ_BYTES / sample_period_secs),
        }
    }
}
