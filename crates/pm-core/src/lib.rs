//! `pm-core` — foundational types for the `rust_pm` payload power model.
//!
//! This crate is a dependency of every other `pm-*` crate.  It intentionally
//! has no `pm-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`time`]  | `TimeGrid` — the uniform sample grid              |
//! | [`units`] | µA/mA → mW conversions at a supply voltage        |
//! | [`error`] | `PmError`, `PmResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod time;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PmError, PmResult};
pub use time::TimeGrid;
pub use units::{ma_to_mw, ua_to_mw};
