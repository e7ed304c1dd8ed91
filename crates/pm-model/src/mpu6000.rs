//! MPU6000 6-axis accelerometer/gyroscope.
//!
//! The register-map output-rate formula gates how fast the part can be
//! read: `output_rate = gyro_rate / (1 + sample_rate_divisor)` where the
//! gyroscope rate is 8 kHz with the digital low-pass filter bypassed
//! (DLPF 0 or 7) and 1 kHz otherwise.  Per-mode supply currents come from
//! the datasheet; low-power accelerometer mode is priced by its wakeup
//! frequency.

use pm_core::{ma_to_mw, ua_to_mw};

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "MPU6000";

const VOLTAGE_V: f64 = 3.3;

/// (wakeup frequency Hz, supply current µA) for low-power accelerometer mode.
const LOW_POWER_WAKEUP: [(f64, f64); 4] = [(1.25, 10.0), (5.0, 20.0), (20.0, 70.0), (40.0, 140.0)];

const ACCEL_UA: f64 = 500.0;
const GYRO_MA: f64 = 3.6;
const GYRO_DMP_MA: f64 = 3.7;
const ACCEL_GYRO_MA: f64 = 3.8;
const ACCEL_GYRO_DMP_MA: f64 = 3.9;

/// 6 bytes of axis data + 4 bytes of timestamp per read; combined
/// accel+gyro modes read both register banks.
const BASE_READ_BYTES: f64 = 10.0;
const COMBO_READ_BYTES: f64 = 16.0;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mpu6000Mode {
    Accelerometer,
    AccelerometerLowPower,
    Gyroscope,
    GyroscopeDmp,
    AccelerometerAndGyroscope,
    AccelerometerAndGyroscopeDmp,
    Shutdown,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mpu6000Config {
    pub mode: Mpu6000Mode,
    /// Wakeup frequency in Hz; only meaningful in low-power mode.
    pub low_power_wakeup_hz: f64,
    /// 3-bit DLPF_CFG register value (0–7).
    pub digital_low_pass: u8,
    /// SMPLRT_DIV register value (0–255).
    pub sample_rate_divisor: u8,
}

impl Mpu6000Config {
    pub fn low_power(wakeup_hz: f64, digital_low_pass: u8, sample_rate_divisor: u8) -> Self {
        Self {
            mode: Mpu6000Mode::AccelerometerLowPower,
            low_power_wakeup_hz: wakeup_hz,
            digital_low_pass,
            sample_rate_divisor,
        }
    }

    pub fn running(mode: Mpu6000Mode, digital_low_pass: u8, sample_rate_divisor: u8) -> Self {
        Self {
            mode,
            low_power_wakeup_hz: 0.0,
            digital_low_pass,
            sample_rate_divisor,
        }
    }

    pub fn shutdown() -> Self {
        Self {
            mode: Mpu6000Mode::Shutdown,
            low_power_wakeup_hz: 0.0,
            digital_low_pass: 0,
            sample_rate_divisor: 0,
        }
    }
}

// ── Model ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct Mpu6000;

impl Mpu6000 {
    pub fn new() -> Self {
        Self
    }

    /// Gyroscope output rate implied by the DLPF setting (register map §4.2).
    fn gyro_output_rate_hz(digital_low_pass: u8) -> f64 {
        if digital_low_pass == 0 || digital_low_pass == 7 {
            8_000.0
        } else {
            1_000.0
        }
    }

    /// Seconds between register updates at this DLPF/divisor setting.
    fn register_period_secs(config: &Mpu6000Config) -> f64 {
        let rate = Self::gyro_output_rate_hz(config.digital_low_pass);
        (1.0 + config.sample_rate_divisor as f64) / rate
    }

    /// DLPF 0 and 7 bypass the filter; accelerometer paths require it.
    fn requires_filter(mode: Mpu6000Mode) -> bool {
        matches!(
            mode,
            Mpu6000Mode::Accelerometer
                | Mpu6000Mode::AccelerometerLowPower
                | Mpu6000Mode::AccelerometerAndGyroscope
                | Mpu6000Mode::AccelerometerAndGyroscopeDmp
        )
    }
}

impl PowerModel for Mpu6000 {
    type Config = Mpu6000Config;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, config: &Self::Config) -> ModelResult<()> {
        if config.digital_low_pass > 7 {
            return Err(ModelError::invalid(
                NAME,
                format!("DLPF_CFG is a 3-bit field, got {}", config.digital_low_pass),
            ));
        }

        if Self::requires_filter(config.mode)
            && (config.digital_low_pass == 0 || config.digital_low_pass == 7)
        {
            return Err(ModelError::invalid(
                NAME,
                "accelerometer modes require the digital low-pass filter (DLPF 1-6)",
            ));
        }

        match config.mode {
            Mpu6000Mode::AccelerometerLowPower => {
                if !LOW_POWER_WAKEUP
                    .iter()
                    .any(|&(hz, _)| hz == config.low_power_wakeup_hz)
                {
                    let options: Vec<f64> = LOW_POWER_WAKEUP.iter().map(|&(hz, _)| hz).collect();
                    return Err(ModelError::invalid(
                        NAME,
                        format!(
                            "low-power wakeup {} Hz not in {options:?}",
                            config.low_power_wakeup_hz
                        ),
                    ));
                }
            }
            Mpu6000Mode::Shutdown => {
                if config.low_power_wakeup_hz != 0.0 || config.digital_low_pass != 0 {
                    return Err(ModelError::invalid(
                        NAME,
                        "shutdown takes no wakeup frequency or DLPF setting",
                    ));
                }
            }
            _ => {
                if config.low_power_wakeup_hz != 0.0 {
                    return Err(ModelError::invalid(
                        NAME,
                        "wakeup frequency only applies to low-power mode",
                    ));
                }
            }
        }

        Ok(())
    }

    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        if config.mode == Mpu6000Mode::Shutdown {
            return Ok(0.0);
        }

        let register_period = Self::register_period_secs(config);
        if register_period >= sample_period_secs {
            return Err(ModelError::SamplePeriodTooShort {
                component: NAME,
                needed_secs: register_period,
                got_secs: sample_period_secs,
            });
        }

        let per_sample_mw = match config.mode {
            Mpu6000Mode::AccelerometerLowPower => {
                let current_ua = LOW_POWER_WAKEUP
                    .iter()
                    .find(|&&(hz, _)| hz == config.low_power_wakeup_hz)
                    .map(|&(_, ua)| ua)
                    .unwrap_or(0.0);
                ua_to_mw(current_ua, VOLTAGE_V)
            }
            Mpu6000Mode::Accelerometer => ua_to_mw(ACCEL_UA, VOLTAGE_V),
            Mpu6000Mode::Gyroscope => ma_to_mw(GYRO_MA, VOLTAGE_V),
            Mpu6000Mode::GyroscopeDmp => ma_to_mw(GYRO_DMP_MA, VOLTAGE_V),
            Mpu6000Mode::AccelerometerAndGyroscope => ma_to_mw(ACCEL_GYRO_MA, VOLTAGE_V),
            Mpu6000Mode::AccelerometerAndGyroscopeDmp => ma_to_mw(ACCEL_GYRO_DMP_MA, VOLTAGE_V),
            Mpu6000Mode::Shutdown => 0.0, // handled above
        };

        Ok(per_sample_mw / sample_period_secs)
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        let bytes = match config.mode {
            Mpu6000Mode::Shutdown => return Ok(0.0),
            Mpu6000Mode::AccelerometerAndGyroscope | Mpu6000Mode::AccelerometerAndGyroscopeDmp => {
                COMBO_READ_BYTES
            }
            _ => BASE_READ_BYTES,
        };
        Ok(bytes / sample_period_secs)
    }
}
