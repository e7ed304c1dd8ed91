//! CAP11NA capacitive sensor.
//!
//! Only the data side of this part is characterized; power is a flat 1 mW
//! estimate while on.  Revisit the constant when the electrical
//! characterization lands.

use crate::model::PowerModel;
use crate::ModelResult;

const NAME: &str = "CAP11NA";

const ON_POWER_MW: f64 = 1.0;
const READ_BYTES: f64 = 6.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CapMode {
    CapOn,
    CapOff,
}

#[derive(Clone, Debug, Default)]
pub struct Cap11na;

impl Cap11na {
    pub fn new() -> Self {
        Self
    }
}

impl PowerModel for Cap11na {
    type Config = CapMode;

    fn name(&self) -> &'static str {
        NAME
    }

    fn validate(&self, _config: &Self::Config) -> ModelResult<()> {
        Ok(())
    }

    fn power_mw(&self, config: &Self::Config, _sample_period_secs: f64) -> ModelResult<f64> {
        Ok(match config {
            CapMode::CapOn => ON_POWER_MW,
            CapMode::CapOff => 0.0,
        })
    }

    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64> {
        Ok(match config {
            CapMode::CapOn => READ_BYTES / sample_period_secs,
            CapMode::CapOff => 0.0,
        })
    }
}
