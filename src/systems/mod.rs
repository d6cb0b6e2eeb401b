//! Application systems
//!
//! Systems that sit between the host callbacks and the game crates.

mod simulation;

pub use simulation::{SimulationResult, SimulationSystem, MENU_SCENE};
