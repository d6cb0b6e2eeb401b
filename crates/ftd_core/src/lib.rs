//! Core types for the Fear The Dead chase scene
//!
//! This crate provides the scene-side types the chase controller talks to:
//!
//! - [`CollisionCategory`] - Opaque bitmask tag on a physics body
//! - [`Node`] - A sprite in the scene graph with its physics state
//! - [`NodeTemplate`] - Serializable node description from a scene file
//! - [`SceneGraph`] - Container for all nodes, the camera and the audio listener
//! - [`NodeKey`] - Generational key to a node in the graph
//! - [`Scene`] - Loadable/saveable pre-authored scene
//! - [`SceneManager`] - Scene stack with animated transitions

mod category;
mod node;
mod graph;
mod scene;
pub mod scene_manager;
pub mod scene_transition;
pub mod scene_validator;

pub use category::CollisionCategory;
pub use node::{AudioEmitter, Node, NodeTemplate, GOAL_NODE, PLAYER_NODE, ZOMBIE_NODE};
pub use graph::{NodeKey, SceneGraph};
pub use scene::{ActiveScene, Scene, SceneError, SceneLoadError, SceneSaveError};
pub use scene_manager::SceneManager;
pub use scene_transition::{SceneTransition, TransitionEffect};
pub use scene_validator::{SceneValidator, ValidationError};

// Re-export the vector type for convenience
pub use ftd_math::Vec2;
