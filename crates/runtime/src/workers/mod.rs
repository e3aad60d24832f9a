//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker executes gameplay commands; the clock worker feeds
//! it one tick per interval.

mod clock;
mod simulation;

pub use clock::ClockWorker;
pub use simulation::{Command, SimulationWorker};
