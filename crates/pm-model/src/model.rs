//! The `PowerModel` trait implemented by every component model.

use crate::ModelResult;

/// Sample period applied when a schedule entry does not specify one.
pub const DEFAULT_SAMPLE_PERIOD_SECS: f64 = 1.0;

/// A component that can price its operating modes.
///
/// `Config` is the component's discrete configuration (mode plus register
/// settings).  `validate` checks it against the datasheet's legal space;
/// `power_mw`/`data_rate` assume a validated config and only fail when the
/// requested sample period outruns the hardware.
///
/// `data_rate` is in bytes per second and may be negative: a radio in a
/// transmit mode drains the payload's stored data rather than adding to it.
pub trait PowerModel {
    type Config: Clone;

    /// Component name used in traces and error messages.
    fn name(&self) -> &'static str;

    /// Check `config` against the component's legal configuration space.
    fn validate(&self, config: &Self::Config) -> ModelResult<()>;

    /// Average power draw in mW while operating in `config`, sampling every
    /// `sample_period_secs` seconds.
    fn power_mw(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64>;

    /// Data produced in bytes per second while operating in `config`.
    fn data_rate(&self, config: &Self::Config, sample_period_secs: f64) -> ModelResult<f64>;
}
