//! Application systems
//!
//! The fixed-step simulation and the host receiving the puzzle's signals.

mod host;
mod simulation;

pub use host::LoggingHost;
pub use simulation::{SimulationSystem, SOLVE_TIME_LIMIT};
