//! TPIS1S1385 thermopile.
//!
//! Two-state device: 15 µA while measuring, off otherwise.  A measurement
//! takes 0.5 ms, which bounds how fast it can be sampled.

use pm_core::ua_to_mw;

use crate::model::PowerModel;
use crate::{ModelError, ModelResult};

const NAME: &str = "TPIS1S1385";

const VOLTAGE_V: f64 = 3.3;
const ACTIVE_UA: f64 = 15.0;
const SHUTDOWN_UA: f64 = 0.0;
const MEASUREMENT_SECS: f64 = 0.0005;
const READ_BYTES: f64 = 6.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThermopileMode {
    TpOn,
    TpOff,
}

#[derive(Clone, Debug, Default)]
pub struct Tpis1s1385;

impl Tpis1s1385 {
    pub fn new() -> Self {
        Self
    }
}

impl PowerModel for Tpis1s1385 {
    type Config = ThermopileMode;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, _config: &Self::Config) -> ModelResult<()> {
        // The mode enum is the whole configuration space.
        Ok(())
    }

    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        if MEASUREMENT_SECS >= sample_period_secs {
            return Err(ModelError::SamplePeriodTooShort {
                component: NAME,
                needed_secs: MEASUREMENT_SECS,
                got_secs: sample_period_secs,
            });
        }
        let current_ua = match config {
            ThermopileMode::TpOn => ACTIVE_UA,
            ThermopileMode::TpOff => SHUTDOWN_UA,
        };
        Ok(ua_to_mw(current_ua, VOLTAGE_V) / sample_period_secs)
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        match config {
            ThermopileMode::TpOn => Ok(READ_BYTES / sample_period_secs),
            ThermopileMode::TpOff => Ok(0.0),
        }
    }
}
