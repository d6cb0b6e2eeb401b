//! Scene nodes
//!
//! A Node is a sprite in the scene graph together with the state of its
//! physics body. The host engine owns the real physics; the node only
//! records what the host reports and what the controller requests.

use ftd_math::Vec2;
use serde::{Deserialize, Serialize};

use crate::CollisionCategory;

/// Name of the player sprite in a scene file
pub const PLAYER_NODE: &str = "player";
/// Name shared by every zombie sprite in a scene file
pub const ZOMBIE_NODE: &str = "zombie";
/// Name of the goal sprite in a scene file
pub const GOAL_NODE: &str = "goal";

/// A looping sound source attached to a node
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioEmitter {
    /// Sound file name, resolved by the host's asset loader
    pub source: String,
    /// Whether the emitter is attenuated by distance to the listener
    pub positional: bool,
}

impl AudioEmitter {
    /// Create a positional emitter for the given sound file
    pub fn positional(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            positional: true,
        }
    }
}

/// A sprite in the scene graph
#[derive(Clone, Debug)]
pub struct Node {
    /// Optional name for lookup (several nodes may share a name)
    pub name: Option<String>,
    /// Centre position in scene coordinates
    pub position: Vec2,
    /// Frame size (width, height)
    pub size: Vec2,
    /// Orientation in radians, counter-clockwise
    pub rotation: f32,
    /// Velocity handed to the host integrator (units per second)
    pub velocity: Vec2,
    /// Whether the body has been put to rest
    pub resting: bool,
    /// Whether the body is moved by the host integrator
    pub dynamic: bool,
    /// Collision category of the body
    pub category: CollisionCategory,
    /// Categories this body reports contacts with
    pub contact_mask: CollisionCategory,
    /// Child audio emitters
    pub audio: Vec<AudioEmitter>,
}

impl Node {
    /// Create an unnamed static node at the given position
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            name: None,
            position,
            size,
            rotation: 0.0,
            velocity: Vec2::ZERO,
            resting: false,
            dynamic: false,
            category: CollisionCategory::empty(),
            contact_mask: CollisionCategory::empty(),
            audio: Vec::new(),
        }
    }

    /// Set the name of this node
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the collision category and contact mask
    pub fn with_category(mut self, category: CollisionCategory, contact_mask: CollisionCategory) -> Self {
        self.category = category;
        self.contact_mask = contact_mask;
        self
    }

    /// Mark the node as moved by the host integrator
    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Check if this node has the given name
    #[inline]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Half of the frame size
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }
}

/// Serializable node description
///
/// NodeTemplate is what a scene file stores; runtime-only state (velocity,
/// resting, audio) starts empty when the template is instantiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeTemplate {
    /// Optional name for this node (for lookup)
    pub name: Option<String>,
    /// Centre position in scene coordinates
    pub position: Vec2,
    /// Frame size (width, height)
    pub size: Vec2,
    /// Initial orientation in radians
    #[serde(default)]
    pub rotation: f32,
    /// Raw collision category bits
    #[serde(default)]
    pub category: u32,
    /// Raw contact mask bits
    #[serde(default)]
    pub contact_mask: u32,
    /// Whether the body is moved by the host integrator
    #[serde(default)]
    pub dynamic: bool,
}

impl NodeTemplate {
    /// Create a new static, uncategorised node template
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            name: None,
            position,
            size,
            rotation: 0.0,
            category: 0,
            contact_mask: 0,
            dynamic: false,
        }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the raw category and contact mask bits
    pub fn with_category(mut self, category: u32, contact_mask: u32) -> Self {
        self.category = category;
        self.contact_mask = contact_mask;
        self
    }

    /// Mark the template as a dynamic body
    pub fn dynamic(mut self) -> Self {
        self.dynamic = true;
        self
    }

    /// Convert this template to a Node
    pub fn to_node(&self) -> Node {
        let mut node = Node::new(self.position, self.size)
            .with_category(
                CollisionCategory::from_raw(self.category),
                CollisionCategory::from_raw(self.contact_mask),
            )
            .with_dynamic(self.dynamic);
        node.rotation = self.rotation;
        if let Some(ref name) = self.name {
            node = node.with_name(name.clone());
        }
        node
    }
}
