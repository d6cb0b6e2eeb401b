//! Chase scene controller for Fear The Dead
//!
//! This crate provides the gameplay for the chase scene, kept apart from
//! the host engine that integrates physics, detects collisions and renders:
//!
//! - [`steer`] - Heading and velocity toward a target
//! - [`ContactPair`] / [`classify`] - Win/lose decision for a body contact
//! - [`ChaseController`] - Load, touch, tick and contact entry points
//! - [`Intent`] - Mutation requests returned to the host
//! - [`SceneView`] / [`SceneHost`] - The narrow interface to the host
//! - [`MenuScene`] - The result screen shown after the chase

pub mod contact;
pub mod controller;
pub mod host;
pub mod intent;
pub mod menu;
pub mod steering;
pub mod tick;

pub use contact::{classify, ContactPair, Outcome, RoleCategories};
pub use controller::{ChaseConfig, ChaseController, GameState};
pub use host::{apply_intents, SceneHost, SceneView};
pub use intent::{Intent, ResultRequest};
pub use menu::MenuScene;
pub use steering::{outside_dead_zone, steer, Steering};
pub use tick::{Sprite, TickContext};
