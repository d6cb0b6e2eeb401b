//! Intents returned to the host
//!
//! The controller never touches engine objects. It returns a list of
//! intents and the host adapter applies them in order. Leaving the scene
//! is requested separately through a [`ResultRequest`], which the scene
//! manager handles.

use ftd_core::{AudioEmitter, TransitionEffect};
use ftd_math::Vec2;

use crate::contact::Outcome;

/// A mutation the controller wants applied to the live scene
#[derive(Clone, Debug, PartialEq)]
pub enum Intent<H> {
    /// Rotate a sprite instantly to `angle` radians
    Rotate { node: H, angle: f32 },
    /// Hand a velocity to the host integrator
    SetVelocity { node: H, velocity: Vec2 },
    /// Put a body to rest
    Rest { node: H },
    /// Centre the camera on a scene position
    CenterCamera { position: Vec2 },
    /// Attach a looping sound to a sprite
    AttachAudio { node: H, emitter: AudioEmitter },
    /// Move the audio listener to a sprite
    SetListener { node: H },
}

/// Request to present the result menu
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRequest {
    /// How the chase ended
    pub outcome: Outcome,
    /// Transition into the menu
    pub transition: TransitionEffect,
}

impl ResultRequest {
    /// Whether the menu should announce a win
    #[inline]
    pub fn did_win(&self) -> bool {
        self.outcome.did_win()
    }
}

impl<H> Intent<H> {
    /// The node this intent targets, if any
    pub fn node(&self) -> Option<&H> {
        match self {
            Intent::Rotate { node, .. }
            | Intent::SetVelocity { node, .. }
            | Intent::Rest { node }
            | Intent::AttachAudio { node, .. }
            | Intent::SetListener { node } => Some(node),
            Intent::CenterCamera { .. } => None,
        }
    }
}
