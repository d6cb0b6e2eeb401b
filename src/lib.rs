//! Fear The Dead
//!
//! Application layer for the chase scene: configuration and the simulation
//! system that wires the chase controller to the scene manager.

pub mod config;
pub mod systems;
