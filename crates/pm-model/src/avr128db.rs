//! AVR128DB microcontroller.
//!
//! Supply current depends on the sleep mode, the clock source, and the
//! effective CPU frequency (oscillator frequency ÷ prescaler).  The
//! datasheet's current-vs-frequency curves are piecewise linear; they are
//! reproduced here by interpolating across the sorted grid of reachable
//! effective frequencies, with a knee at 4 MHz where the core switches
//! operating range.  A flat 4 mW peripheral estimate is added to every
//! mode.
//!
//! The MCU contributes no payload data of its own.

use pm_core::{ma_to_mw, ua_to_mw};

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "AVR128DB";

const VOLTAGE_V: f64 = 3.3;
/// Flat estimate for pins, timers, and other always-on peripherals.
const PERIPHERAL_POWER_MW: f64 = 4.0;

const FREQ_OPTIONS_MHZ: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 8.0, 12.0, 16.0, 20.0, 24.0];
const PRESCALER_OPTIONS: [u32; 12] = [1, 2, 4, 8, 16, 32, 64, 6, 10, 12, 24, 48];

/// Knee frequencies of the datasheet current curves, MHz.
const KNEE_MHZ: f64 = 4.0;
const TOP_MHZ: f64 = 24.0;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum McuMode {
    Active,
    Idle,
    Standby,
    PowerDown,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClockSource {
    /// Internal high-frequency oscillator at one of the discrete settings.
    OscHf { freq_mhz: f64 },
    /// Internal 32.768 kHz oscillator.
    Osc32k,
    /// External 32.768 kHz crystal, optionally in low-power drive.
    Xosc32k { low_power: bool },
    /// External clock input.
    ExtClk { freq_mhz: f64 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Avr128DbConfig {
    pub mode: McuMode,
    pub clock: ClockSource,
    /// Main clock prescaler division factor.
    pub prescaler: u32,
}

impl Avr128DbConfig {
    pub fn new(mode: McuMode, clock: ClockSource, prescaler: u32) -> Self {
        Self { mode, clock, prescaler }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Avr128Db;

impl Avr128Db {
    pub fn new() -> Self {
        Self
    }

    /// Sorted, deduplicated grid of reachable effective frequencies
    /// (every oscillator option divided by every prescaler option).
    fn effective_freq_grid() -> Vec<f64> {
        let mut grid: Vec<f64> = FREQ_OPTIONS_MHZ
            .iter()
            .flat_map(|&f| PRESCALER_OPTIONS.iter().map(move |&d| f / d as f64))
            .collect();
        grid.sort_by(f64::total_cmp);
        grid.dedup();
        grid
    }

    /// Index of `freq_mhz / prescaler` in the effective-frequency grid.
    fn grid_index(freq_mhz: f64, prescaler: u32) -> ModelResult<(usize, usize)> {
        let grid = Self::effective_freq_grid();
        let eff = freq_mhz / prescaler as f64;
        let idx = grid.iter().position(|&x| x == eff).ok_or_else(|| {
            ModelError::invalid(
                NAME,
                format!("effective frequency {eff} MHz is not a reachable setting"),
            )
        })?;
        Ok((idx, grid.len()))
    }

    /// Knee index (4 MHz) in the effective-frequency grid.  The grid always
    /// contains 4.0 (4 MHz ÷ 1), so the lookup cannot fail.
    fn knee_indices() -> (usize, usize) {
        let grid = Self::effective_freq_grid();
        let a = grid.iter().position(|&x| x == KNEE_MHZ).unwrap_or(0);
        let b = grid
            .iter()
            .position(|&x| x == TOP_MHZ)
            .unwrap_or(grid.len() - 1);
        (a, b)
    }
}

/// Value `i` of an `n`-point linear ramp from `start` to `end`.
fn lerp_index(start: f64, end: f64, n: usize, i: usize) -> f64 {
    if n <= 1 {
        start
    } else {
        start + (end - start) * i as f64 / (n - 1) as f64
    }
}

/// Datasheet current curve: one ramp up to the 4 MHz knee, a steeper one
/// from the knee to 24 MHz.
fn two_segment_ma(idx: usize, knee: usize, top: usize, low: (f64, f64), high: (f64, f64)) -> f64 {
    if idx < knee {
        lerp_index(low.0, low.1, knee + 1, idx)
    } else {
        lerp_index(high.0, high.1, top - knee + 1, idx - knee)
    }
}

impl PowerModel for Avr128Db {
    type Config = Avr128DbConfig;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, config: &Self::Config) -> ModelResult<()> {
        if !PRESCALER_OPTIONS.contains(&config.prescaler) {
            return Err(ModelError::invalid(
                NAME,
                format!("prescaler {} not in {PRESCALER_OPTIONS:?}", config.prescaler),
            ));
        }
        match config.clock {
            ClockSource::OscHf { freq_mhz } | ClockSource::ExtClk { freq_mhz } => {
                if !FREQ_OPTIONS_MHZ.contains(&freq_mhz) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("clock frequency {freq_mhz} MHz not in {FREQ_OPTIONS_MHZ:?}"),
                    ));
                }
                Ok(())
            }
            ClockSource::Osc32k | ClockSource::Xosc32k { .. } => Ok(()),
        }
    }

    fn power_mw(&self, config: &Self::Config, _sample_period_secs: f64) -> ModelResult<f64> {
        let (knee, top) = Self::knee_indices();

        let core_mw = match (config.mode, config.clock) {
            // ── Active ────────────────────────────────────────────────────
            (McuMode::Active, ClockSource::OscHf { freq_mhz }) => {
                let (idx, _) = Self::grid_index(freq_mhz, config.prescaler)?;
                ma_to_mw(two_segment_ma(idx, knee, top, (0.1, 1.0), (1.0, 4.1)), VOLTAGE_V)
            }
            (McuMode::Active, ClockSource::Osc32k) => ua_to_mw(7.0, VOLTAGE_V),
            (McuMode::Active, ClockSource::Xosc32k { low_power }) => {
                ua_to_mw(if low_power { 7.5 } else { 9.0 }, VOLTAGE_V)
            }
            (McuMode::Active, ClockSource::ExtClk { freq_mhz }) => {
                let (idx, n) = Self::grid_index(freq_mhz, config.prescaler)?;
                ma_to_mw(lerp_index(0.1, 3.8, n, idx), VOLTAGE_V)
            }

            // ── Idle ──────────────────────────────────────────────────────
            (McuMode::Idle, ClockSource::OscHf { freq_mhz }) => {
                let (idx, _) = Self::grid_index(freq_mhz, config.prescaler)?;
                ma_to_mw(two_segment_ma(idx, knee, top, (0.1, 0.58), (0.58, 1.9)), VOLTAGE_V)
            }
            (McuMode::Idle, ClockSource::Osc32k) => ua_to_mw(4.0, VOLTAGE_V),
            (McuMode::Idle, ClockSource::Xosc32k { low_power }) => {
                ua_to_mw(if low_power { 6.0 } else { 7.5 }, VOLTAGE_V)
            }
            (McuMode::Idle, ClockSource::ExtClk { freq_mhz }) => {
                let (idx, n) = Self::grid_index(freq_mhz, config.prescaler)?;
                ma_to_mw(lerp_index(0.1, 1.7, n, idx), VOLTAGE_V)
            }

            // ── Standby ───────────────────────────────────────────────────
            (McuMode::Standby, ClockSource::Osc32k) => ua_to_mw(1.2, VOLTAGE_V),
            (McuMode::Standby, ClockSource::Xosc32k { low_power }) => {
                ua_to_mw(if low_power { 3.2 } else { 1.6 }, VOLTAGE_V)
            }
            (McuMode::Standby, _) => ua_to_mw(0.7, VOLTAGE_V),

            // ── Power-down ────────────────────────────────────────────────
            (McuMode::PowerDown, _) => ua_to_mw(0.7, VOLTAGE_V),
        };

        Ok(core_mw + PERIPHERAL_POWER_MW)
    }

    fn data_rate(&self, _config: &Self::Config, _sample_period_secs: f64) -> ModelResult<f64> {
        Ok(0.0)
    }
}
