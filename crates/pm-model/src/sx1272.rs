//! SX1272 LoRa radio.
//!
//! The flight configuration is pinned at 915 MHz, spreading factor 12, and
//! coding rate 4/6, which gives an effective bitrate of 4800 bps.  A TX or
//! RX burst is priced as `payload × 8 / 4800` seconds of on-air current
//! plus idle current for the remainder of a one-second frame.  TX and FSTX
//! report a negative data rate: transmitted bytes leave the payload's
//! storage budget.

use pm_core::{ma_to_mw, ua_to_mw};

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "SX1272";

const VOLTAGE_V: f64 = 3.3;
/// Effective bitrate at SF12 / CR 4/6, bits per second.
const BITRATE_BPS: f64 = 4800.0;

const SLEEP_UA: f64 = 0.1;
const STANDBY_MA: f64 = 1.4;
const IDLE_UA: f64 = 1.5;
const SYNTH_MA: f64 = 4.5;

/// (output power dBm, supply current mA) while transmitting.
const TX_CURRENT_MA: [(u8, f64); 4] = [(7, 18.0), (13, 28.0), (17, 90.0), (20, 125.0)];

/// (bandwidth kHz, RX current mA with LNA boost off, with boost on).
const RX_CURRENT_MA: [(u32, f64, f64); 3] =
    [(125, 9.7, 10.8), (250, 10.5, 11.6), (500, 12.0, 13.0)];

const FREQ_MHZ: f64 = 915.0;
const SPREADING_FACTOR: u8 = 12;
const CODING_RATE: u8 = 6;

/// Largest LoRa payload at SF12; RX can see the full 255-byte FIFO.
const MAX_TX_PAYLOAD: u32 = 232;
const MAX_RX_PAYLOAD: u32 = 255;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sx1272Mode {
    Sleep,
    Standby,
    Idle,
    Tx,
    RxContinuous,
    RxSingle,
    Fstx,
    Fsrx,
    Cad,
}

impl Sx1272Mode {
    fn is_rx(self) -> bool {
        matches!(self, Sx1272Mode::RxContinuous | Sx1272Mode::RxSingle)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sx1272Config {
    pub mode: Sx1272Mode,
    pub freq_mhz: f64,
    pub output_power_dbm: u8,
    pub bandwidth_khz: u32,
    pub lna_boost: bool,
    pub spreading_factor: u8,
    pub coding_rate: u8,
    pub payload_bytes: u32,
}

impl Sx1272Config {
    /// Flight-standard configuration in the given mode.
    pub fn new(mode: Sx1272Mode, payload_bytes: u32) -> Self {
        Self {
            mode,
            freq_mhz: FREQ_MHZ,
            output_power_dbm: 13,
            bandwidth_khz: 125,
            lna_boost: false,
            spreading_factor: SPREADING_FACTOR,
            coding_rate: CODING_RATE,
            payload_bytes,
        }
    }

    pub fn tx(output_power_dbm: u8, payload_bytes: u32) -> Self {
        Self {
            output_power_dbm,
            ..Self::new(Sx1272Mode::Tx, payload_bytes)
        }
    }

    pub fn rx(mode: Sx1272Mode, bandwidth_khz: u32, lna_boost: bool, payload_bytes: u32) -> Self {
        Self {
            bandwidth_khz,
            lna_boost,
            ..Self::new(mode, payload_bytes)
        }
    }

    /// Seconds on air for this payload.
    fn airtime_secs(&self) -> f64 {
        self.payload_bytes as f64 * 8.0 / BITRATE_BPS
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Sx1272;

impl Sx1272 {
    pub fn new() -> Self {
        Self
    }

    fn rx_current_ma(bandwidth_khz: u32, lna_boost: bool) -> ModelResult<f64> {
        RX_CURRENT_MA
            .iter()
            .find(|&&(bw, _, _)| bw == bandwidth_khz)
            .map(|&(_, off, on)| if lna_boost { on } else { off })
            .ok_or_else(|| {
                ModelError::invalid(NAME, format!("unsupported bandwidth {bandwidth_khz} kHz"))
            })
    }

    /// Burst power: on-air current for the airtime, idle current for the
    /// rest of a one-second frame.
    fn burst_mw(airtime_secs: f64, active_ma: f64) -> f64 {
        let standby_secs = 1.0 - airtime_secs;
        airtime_secs * ma_to_mw(active_ma, VOLTAGE_V)
            + standby_secs * ua_to_mw(IDLE_UA, VOLTAGE_V)
    }
}

impl PowerModel for Sx1272 {
    type Config = Sx1272Config;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, config: &Self::Config) -> ModelResult<()> {
        if config.freq_mhz != FREQ_MHZ
            || config.spreading_factor != SPREADING_FACTOR
            || config.coding_rate != CODING_RATE
        {
            return Err(ModelError::invalid(
                NAME,
                format!(
                    "only the flight RF configuration is characterized \
                     ({FREQ_MHZ} MHz, SF{SPREADING_FACTOR}, CR 4/{CODING_RATE})"
                ),
            ));
        }
        if !RX_CURRENT_MA.iter().any(|&(bw, _, _)| bw == config.bandwidth_khz) {
            return Err(ModelError::invalid(
                NAME,
                format!("unsupported bandwidth {} kHz", config.bandwidth_khz),
            ));
        }

        match config.mode {
            Sx1272Mode::Tx => {
                if !TX_CURRENT_MA.iter().any(|&(p, _)| p == config.output_power_dbm) {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("TX output power {} dBm is not characterized", config.output_power_dbm),
                    ));
                }
                if config.bandwidth_khz != 125 || config.lna_boost {
                    return Err(ModelError::invalid(
                        NAME,
                        "TX uses 125 kHz bandwidth with the LNA boost off",
                    ));
                }
                if config.payload_bytes > MAX_TX_PAYLOAD {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("TX payload limited to {MAX_TX_PAYLOAD} bytes at SF12"),
                    ));
                }
            }
            mode if mode.is_rx() => {
                if config.output_power_dbm != 13 {
                    return Err(ModelError::invalid(NAME, "output power only applies to TX"));
                }
                if config.payload_bytes > MAX_RX_PAYLOAD {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("RX payload limited to the {MAX_RX_PAYLOAD}-byte FIFO"),
                    ));
                }
            }
            Sx1272Mode::Cad => {
                if config.output_power_dbm != 13 || config.lna_boost {
                    return Err(ModelError::invalid(
                        NAME,
                        "CAD runs at default output power with the LNA boost off",
                    ));
                }
                if config.payload_bytes > MAX_TX_PAYLOAD {
                    return Err(ModelError::invalid(
                        NAME,
                        format!("CAD payload limited to {MAX_TX_PAYLOAD} bytes"),
                    ));
                }
            }
            _ => {
                if config.output_power_dbm != 13
                    || config.bandwidth_khz != 125
                    || config.lna_boost
                    || config.payload_bytes > MAX_TX_PAYLOAD
                {
                    return Err(ModelError::invalid(
                        NAME,
                        "non-RF modes use the default RF configuration",
                    ));
                }
            }
        }

        Ok(())
    }

    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        let airtime = config.airtime_secs();
        let gate_airtime = || {
            if airtime >= sample_period_secs {
                Err(ModelError::SamplePeriodTooShort {
                    component: NAME,
                    needed_secs: airtime,
                    got_secs: sample_period_secs,
                })
            } else {
                Ok(())
            }
        };

        let mw = match config.mode {
            Sx1272Mode::Sleep => ua_to_mw(SLEEP_UA, VOLTAGE_V),
            Sx1272Mode::Standby => ma_to_mw(STANDBY_MA, VOLTAGE_V),
            Sx1272Mode::Idle => ua_to_mw(IDLE_UA, VOLTAGE_V),
            Sx1272Mode::Tx => {
                gate_airtime()?;
                let current_ma = TX_CURRENT_MA
                    .iter()
                    .find(|&&(p, _)| p == config.output_power_dbm)
                    .map(|&(_, ma)| ma)
                    .ok_or_else(|| {
                        ModelError::invalid(
                            NAME,
                            format!(
                                "TX output power {} dBm is not characterized",
                                config.output_power_dbm
                            ),
                        )
                    })?;
                Self::burst_mw(airtime, current_ma)
            }
            Sx1272Mode::RxContinuous | Sx1272Mode::RxSingle => {
                gate_airtime()?;
                Self::burst_mw(airtime, Self::rx_current_ma(config.bandwidth_khz, config.lna_boost)?)
            }
            Sx1272Mode::Fstx | Sx1272Mode::Fsrx => {
                gate_airtime()?;
                Self::burst_mw(airtime, SYNTH_MA)
            }
            // CAD listens for the airtime only; the radio drops straight
            // back to sleep afterwards.
            Sx1272Mode::Cad => {
                airtime * ma_to_mw(Self::rx_current_ma(config.bandwidth_khz, true)?, VOLTAGE_V)
            }
        };

        Ok(mw)
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        let payload = config.payload_bytes as f64;
        Ok(match config.mode {
            Sx1272Mode::Sleep | Sx1272Mode::Standby | Sx1272Mode::Idle | Sx1272Mode::Cad => 0.0,
            Sx1272Mode::RxContinuous | Sx1272Mode::RxSingle | Sx1272Mode::Fsrx => {
                payload / sample_period_secs
            }
            // Transmitted bytes drain the storage budget.
            Sx1272Mode::Tx | Sx1272Mode::Fstx => -(payload / sample_period_secs),
        })
    }
}
