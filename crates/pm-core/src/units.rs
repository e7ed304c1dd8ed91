//! Electrical unit conversions.
//!
//! Every component model reduces to "current drawn at the 3.3 V rail";
//! keeping the µA→mW and mA→mW conversions here keeps the datasheet
//! tables in the model crate in the units the datasheets print.

/// Power in mW drawn by `current_ua` microamps at `voltage_v` volts.
#[inline]
pub fn ua_to_mw(current_ua: f64, voltage_v: f64) -> f64 {
    current_ua * voltage_v / 1_000.0
}

/// Power in mW drawn by `current_ma` milliamps at `voltage_v` volts.
#[inline]
pub fn ma_to_mw(current_ma: f64, voltage_v: f64) -> f64 {
    current_ma * voltage_v
}
