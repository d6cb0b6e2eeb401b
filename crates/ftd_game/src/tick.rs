//! Per-tick update
//!
//! Everything the chase needs from the scene for one tick is gathered into
//! a [`TickContext`] before [`update`] runs. The update reads nothing else
//! and returns the intents in the order the host should apply them: player
//! first, then zombies in scene order.

use ftd_core::AudioEmitter;
use ftd_math::Vec2;

use crate::controller::ChaseConfig;
use crate::intent::Intent;
use crate::steering::{outside_dead_zone, steer};

/// Snapshot of one mobile sprite
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite<H> {
    /// Host handle
    pub handle: H,
    /// Position after the last physics step
    pub position: Vec2,
    /// Half of the frame size
    pub half_extents: Vec2,
}

impl<H> Sprite<H> {
    pub fn new(handle: H, position: Vec2, half_extents: Vec2) -> Self {
        Self {
            handle,
            position,
            half_extents,
        }
    }
}

/// Inputs for one tick
#[derive(Clone, Debug, PartialEq)]
pub struct TickContext<H> {
    /// The player, if the scene has one
    pub player: Option<Sprite<H>>,
    /// Zombies in scene order
    pub zombies: Vec<Sprite<H>>,
    /// Last touch point
    pub touch: Option<Vec2>,
}

impl<H> Default for TickContext<H> {
    fn default() -> Self {
        Self {
            player: None,
            zombies: Vec::new(),
            touch: None,
        }
    }
}

/// Compute the intents for one tick
///
/// Without a player nothing moves. Without a touch the player is left
/// alone, while the zombies still close in.
pub fn update<H: Copy>(ctx: &TickContext<H>, config: &ChaseConfig) -> Vec<Intent<H>> {
    let Some(player) = ctx.player else {
        return Vec::new();
    };

    let mut intents = Vec::with_capacity(3 + ctx.zombies.len() * 2);

    if let Some(touch) = ctx.touch {
        if outside_dead_zone(player.position, touch, player.half_extents) {
            let s = steer(player.position, touch, config.player_speed);
            intents.push(Intent::Rotate { node: player.handle, angle: s.rotation });
            intents.push(Intent::SetVelocity { node: player.handle, velocity: s.velocity });
            intents.push(Intent::CenterCamera { position: player.position });
        } else {
            intents.push(Intent::Rest { node: player.handle });
        }
    }

    for zombie in &ctx.zombies {
        let s = steer(zombie.position, player.position, config.zombie_speed);
        intents.push(Intent::Rotate { node: zombie.handle, angle: s.rotation });
        intents.push(Intent::SetVelocity { node: zombie.handle, velocity: s.velocity });
    }

    intents
}

/// Intents that wire up a freshly loaded scene
///
/// The listener follows the player and every zombie gets its own moan.
pub fn load_intents<H: Copy>(
    player: Option<H>,
    player_position: Option<Vec2>,
    zombies: &[H],
    config: &ChaseConfig,
) -> Vec<Intent<H>> {
    let mut intents = Vec::with_capacity(zombies.len() + 2);

    if let Some(node) = player {
        intents.push(Intent::SetListener { node });
    }
    for &node in zombies {
        intents.push(Intent::AttachAudio {
            node,
            emitter: AudioEmitter::positional(config.zombie_sound.as_str()),
        });
    }
    if let Some(position) = player_position {
        intents.push(Intent::CenterCamera { position });
    }

    intents
}
