//! Steering math
//!
//! A mobile sprite is turned to face its target and given a velocity of
//! fixed magnitude along that heading. The host integrator then moves it
//! during the next physics step.

use std::f32::consts::{FRAC_PI_2, PI};

use ftd_math::Vec2;

/// Offset between a heading and the sprite rotation that faces it
///
/// Sprite artwork faces -y, so a heading along +x needs a quarter turn.
pub const ARTWORK_FACING_OFFSET: f32 = FRAC_PI_2;

/// Result of steering one sprite toward a target
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Steering {
    /// Heading in radians
    pub angle: f32,
    /// Rotation to apply to the sprite
    pub rotation: f32,
    /// Velocity along the heading
    pub velocity: Vec2,
}

/// Steer from `current` toward `target` at `speed`
///
/// The heading is π + atan2 of (current − target), which points from the
/// sprite at the target. When both points coincide the heading is π.
pub fn steer(current: Vec2, target: Vec2, speed: f32) -> Steering {
    let away = current - target;
    let angle = PI + away.y.atan2(away.x);
    Steering {
        angle,
        rotation: angle + ARTWORK_FACING_OFFSET,
        velocity: Vec2::from_angle(angle) * speed,
    }
}

/// Whether `touch` is far enough from `current` to steer toward
///
/// The dead zone is the sprite's own frame: steering only happens once the
/// touch leaves it along either axis.
pub fn outside_dead_zone(current: Vec2, touch: Vec2, half_extents: Vec2) -> bool {
    let delta = (current - touch).abs();
    delta.x > half_extents.x || delta.y > half_extents.y
}
