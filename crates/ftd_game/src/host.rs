//! Host adapter
//!
//! The chase controller reads the live scene through [`SceneView`] and its
//! intents are written back through [`SceneHost`]. An engine binding
//! implements both for its own node handles; [`SceneGraph`] implements them
//! for scenes instantiated from RON files.

use std::fmt::Debug;

use ftd_core::{AudioEmitter, CollisionCategory, NodeKey, SceneGraph};
use ftd_math::Vec2;

use crate::intent::Intent;

/// Read access to the live scene
pub trait SceneView {
    /// Handle to a node in the host's scene graph
    type Handle: Copy + Eq + Debug;

    /// First node with the given name
    fn find(&self, name: &str) -> Option<Self::Handle>;

    /// Every node with the given name, in children order
    fn find_all(&self, name: &str) -> Vec<Self::Handle>;

    /// Current position of a node
    fn position(&self, node: Self::Handle) -> Option<Vec2>;

    /// Frame size of a node
    fn size(&self, node: Self::Handle) -> Option<Vec2>;

    /// Collision category of a node's physics body
    fn category(&self, node: Self::Handle) -> Option<CollisionCategory>;
}

/// Write access to the live scene
pub trait SceneHost: SceneView {
    /// Rotate a node instantly
    fn set_rotation(&mut self, node: Self::Handle, angle: f32);

    /// Set the velocity the integrator uses on the next step
    fn set_velocity(&mut self, node: Self::Handle, velocity: Vec2);

    /// Put a node's body to rest
    fn set_resting(&mut self, node: Self::Handle);

    /// Centre the camera (ignored if the scene has no camera)
    fn set_camera_position(&mut self, position: Vec2);

    /// Attach a sound emitter as a child of a node
    fn attach_audio(&mut self, node: Self::Handle, emitter: AudioEmitter);

    /// Attach the audio listener to a node
    fn set_listener(&mut self, node: Self::Handle);
}

/// Apply intents to a host in order
pub fn apply_intents<H: SceneHost>(host: &mut H, intents: Vec<Intent<H::Handle>>) {
    for intent in intents {
        match intent {
            Intent::Rotate { node, angle } => host.set_rotation(node, angle),
            Intent::SetVelocity { node, velocity } => host.set_velocity(node, velocity),
            Intent::Rest { node } => host.set_resting(node),
            Intent::CenterCamera { position } => host.set_camera_position(position),
            Intent::AttachAudio { node, emitter } => host.attach_audio(node, emitter),
            Intent::SetListener { node } => host.set_listener(node),
        }
    }
}

impl SceneView for SceneGraph {
    type Handle = NodeKey;

    fn find(&self, name: &str) -> Option<NodeKey> {
        self.get_by_name(name).map(|(key, _)| key)
    }

    fn find_all(&self, name: &str) -> Vec<NodeKey> {
        self.iter_named(name).map(|(key, _)| key).collect()
    }

    fn position(&self, node: NodeKey) -> Option<Vec2> {
        self.get(node).map(|n| n.position)
    }

    fn size(&self, node: NodeKey) -> Option<Vec2> {
        self.get(node).map(|n| n.size)
    }

    fn category(&self, node: NodeKey) -> Option<CollisionCategory> {
        self.get(node).map(|n| n.category)
    }
}

impl SceneHost for SceneGraph {
    fn set_rotation(&mut self, node: NodeKey, angle: f32) {
        if let Some(n) = self.get_mut(node) {
            n.rotation = angle;
        }
    }

    fn set_velocity(&mut self, node: NodeKey, velocity: Vec2) {
        if let Some(n) = self.get_mut(node) {
            n.velocity = velocity;
            n.resting = false;
        }
    }

    fn set_resting(&mut self, node: NodeKey) {
        if let Some(n) = self.get_mut(node) {
            n.velocity = Vec2::ZERO;
            n.resting = true;
        }
    }

    fn set_camera_position(&mut self, position: Vec2) {
        SceneGraph::set_camera_position(self, position);
    }

    fn attach_audio(&mut self, node: NodeKey, emitter: AudioEmitter) {
        if let Some(n) = self.get_mut(node) {
            n.audio.push(emitter);
        }
    }

    fn set_listener(&mut self, node: NodeKey) {
        SceneGraph::set_listener(self, Some(node));
    }
}
