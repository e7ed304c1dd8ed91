//! `pm-model` — datasheet power/data models for the payload components.
//!
//! Every component follows the same three-step workflow: validate the
//! requested configuration against the discrete space the datasheet
//! permits, then price each operating mode as a power draw (mW) and a data
//! rate (bytes/s).  The [`PowerModel`] trait is that seam; `pm-sim` drives
//! any implementor over an expanded schedule.
//!
//! # Crate layout
//!
//! | Module         | Component                                        |
//! |----------------|--------------------------------------------------|
//! | [`model`]      | `PowerModel` trait, default sample period        |
//! | [`tmp117`]     | TMP117 temperature sensor                        |
//! | [`bm1422`]     | BM1422 magnetometer                              |
//! | [`mpu6000`]    | MPU6000 accelerometer/gyroscope                  |
//! | [`tpis1s1385`] | TPIS1S1385 thermopile                            |
//! | [`cap11na`]    | CAP11NA capacitive sensor                        |
//! | [`avr128db`]   | AVR128DB microcontroller                         |
//! | [`sx1272`]     | SX1272 LoRa radio                                |
//! | [`error`]      | `ModelError`, `ModelResult<T>`                   |
//!
//! # Units
//!
//! Datasheet current tables are kept in the units the datasheets print
//! (µA for sensor sleep/standby figures, mA for radio and MCU active
//! figures) and converted through `pm_core::units`, so every `power_mw`
//! result really is milliwatts.

pub mod avr128db;
pub mod bm1422;
pub mod cap11na;
pub mod error;
pub mod model;
pub mod mpu6000;
pub mod sx1272;
pub mod tmp117;
pub mod tpis1s1385;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use avr128db::{Avr128Db, Avr128DbConfig, ClockSource, McuMode};
pub use bm1422::{Bm1422, Bm1422Config, Bm1422Mode};
pub use cap11na::{Cap11na, CapMode};
pub use error::{ModelError, ModelResult};
pub use model::{PowerModel, DEFAULT_SAMPLE_PERIOD_SECS};
pub use mpu6000::{Mpu6000, Mpu6000Config, Mpu6000Mode};
pub use sx1272::{Sx1272, Sx1272Config, Sx1272Mode};
pub use tmp117::{Tmp117, Tmp117Config, Tmp117Mode};
pub use tpis1s1385::{ThermopileMode, Tpis1s1385};
