//! `pm-sim` — simulation loop for the rust_pm payload models.
//!
//! # Run model
//!
//! ```text
//! for each component:
//!   ① Validate — every cycle entry's config is checked by the model.
//!   ② Expand   — the cycle is unrolled to absolute intervals over the grid.
//!   ③ Price    — each interval yields a power draw (mW) and data rate
//!                (bytes/s) for its sample period.
//!   ④ Fill     — power is written per sample; data accumulates
//!                rate × step from t = 0 (negative rates drain it).
//! ```
//!
//! Traces land in a [`TraceSet`], which enforces that every component ran
//! on the same grid, and [`DataBudget`] checks the summed cumulative data
//! against a downlink allowance.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pm_core::TimeGrid;
//! use pm_model::{Tmp117, Tmp117Config};
//! use pm_schedule::{Cycle, ModeEntry};
//! use pm_sim::{run_component, TraceSet};
//!
//! let grid = TimeGrid::new(1.0, 3_600.0)?;
//! let cycle = Cycle::new(vec![
//!     ModeEntry::new("CONTINUOUS", 60.0, Tmp117Config::continuous(8, 1.0)),
//!     ModeEntry::new("SHUTDOWN", 540.0, Tmp117Config::shutdown()),
//! ]);
//! let mut traces = TraceSet::new(grid);
//! traces.push(run_component(&Tmp117::new(), &cycle, &grid)?)?;
//! ```

pub mod budget;
pub mod error;
pub mod run;
pub mod trace;


pub use budget::{BudgetViolation, DataBudget};
pub use error::{SimError, SimResult};
pub use run::run_component;
pub use trace::{ComponentTrace, TraceSet};
