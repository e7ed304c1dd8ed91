//! `pm-schedule` — operating-mode cycles and the schedule expander.
//!
//! # Crate layout
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`entry`]  | `ModeEntry<C>`, `Cycle<C>`                        |
//! | [`expand`] | `ActiveInterval<C>`, `Cycle::expand`              |
//! | [`loader`] | `load_cycle_csv`, `load_cycle_reader`             |
//! | [`error`]  | `ScheduleError`, `ScheduleResult<T>`              |
//!
//! # Cycle model (summary)
//!
//! A component's schedule is a repeating cycle of mode entries, each with a
//! duration in seconds.  [`Cycle::expand`] unrolls the cycle over a total
//! simulated duration into absolute-time intervals:
//!
//! ```text
//! cycle  = [(CONTINUOUS, 10 s), (SHUTDOWN, 20 s)]     period = 30 s
//! expand(75 s) = [0,10) CONTINUOUS | [10,30) SHUTDOWN | [30,40) CONTINUOUS
//!              | [40,60) SHUTDOWN  | [60,70) CONTINUOUS | [70,75) SHUTDOWN
//! ```
//!
//! The final interval is clipped or padded so the expansion covers
//! `[0, total)` exactly.  The config type `C` is opaque to this crate; each
//! component model in `pm-model` supplies its own.

pub mod entry;
pub mod error;
pub mod expand;
pub mod loader;


pub use entry::{Cycle, ModeEntry};
pub use error::{ScheduleError, ScheduleResult};
pub use expand::ActiveInterval;
pub use loader::{load_cycle_csv, load_cycle_reader};
