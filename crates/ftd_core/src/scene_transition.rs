//! Scene transition effects
//!
//! Provides transition effects for scene changes: instant cut, fade and the
//! card-flip transitions used when the chase ends. Each transition tracks
//! its own progress, advanced by the host's frame delta, and provides
//! rendering information like alpha values and flip scale.

use std::time::Duration;

/// Transition effect between scenes
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionEffect {
    /// Instant cut (no transition)
    Instant,
    /// Fade to black, then fade in new scene
    Fade {
        /// Total duration of the fade (out + in)
        duration: Duration,
    },
    /// Flip the view around the horizontal axis, revealing the new scene
    FlipVertical {
        /// Duration of the whole flip
        duration: Duration,
    },
    /// Flip the view around the vertical axis, revealing the new scene
    FlipHorizontal {
        /// Duration of the whole flip
        duration: Duration,
    },
}

impl TransitionEffect {
    /// Get duration of this effect (Instant returns Duration::ZERO)
    pub fn duration(&self) -> Duration {
        match self {
            TransitionEffect::Instant => Duration::ZERO,
            TransitionEffect::Fade { duration } => *duration,
            TransitionEffect::FlipVertical { duration } => *duration,
            TransitionEffect::FlipHorizontal { duration } => *duration,
        }
    }

    /// Build an effect from its configuration name
    ///
    /// Accepts `instant`, `fade`, `flip_vertical` and `flip_horizontal`.
    pub fn from_name(name: &str, duration: Duration) -> Option<Self> {
        match name {
            "instant" => Some(TransitionEffect::Instant),
            "fade" => Some(TransitionEffect::Fade { duration }),
            "flip_vertical" => Some(TransitionEffect::FlipVertical { duration }),
            "flip_horizontal" => Some(TransitionEffect::FlipHorizontal { duration }),
            _ => None,
        }
    }

    /// Configuration name of this effect
    pub fn name(&self) -> &'static str {
        match self {
            TransitionEffect::Instant => "instant",
            TransitionEffect::Fade { .. } => "fade",
            TransitionEffect::FlipVertical { .. } => "flip_vertical",
            TransitionEffect::FlipHorizontal { .. } => "flip_horizontal",
        }
    }
}

/// Active transition state tracking progress between two scenes
pub struct SceneTransition {
    /// The transition effect being applied
    effect: TransitionEffect,
    /// Name of the scene being transitioned from
    from_scene: String,
    /// Name of the scene being transitioned to
    to_scene: String,
    /// Time accumulated so far
    elapsed: Duration,
    /// Current progress from 0.0 (start) to 1.0 (complete)
    progress: f32,
}

impl SceneTransition {
    /// Create a new scene transition at progress 0
    pub fn new(from: String, to: String, effect: TransitionEffect) -> Self {
        Self {
            effect,
            from_scene: from,
            to_scene: to,
            elapsed: Duration::ZERO,
            progress: 0.0,
        }
    }

    /// Advance the transition by `dt` seconds
    ///
    /// Returns true when the transition is complete.
    pub fn advance(&mut self, dt: f32) -> bool {
        let duration = self.effect.duration();
        if duration.is_zero() {
            self.progress = 1.0;
            return true;
        }

        // A delta too large for a Duration finishes the transition
        let Ok(step) = Duration::try_from_secs_f32(dt.max(0.0)) else {
            self.elapsed = duration;
            self.progress = 1.0;
            return true;
        };
        self.elapsed = self.elapsed.saturating_add(step);
        self.progress = (self.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0);
        self.progress >= 1.0
    }

    /// Get current progress (0.0 = start, 1.0 = complete)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Get the destination scene name
    pub fn to_scene(&self) -> &str {
        &self.to_scene
    }

    /// Get the source scene name
    pub fn from_scene(&self) -> &str {
        &self.from_scene
    }

    /// Get the transition effect
    pub fn effect(&self) -> &TransitionEffect {
        &self.effect
    }

    /// Get current alpha for rendering fade effects
    ///
    /// For Fade: goes 1.0 -> 0.0 -> 1.0 (fade out old scene in first half,
    /// fade in new scene in second half). Other effects: always 1.0
    pub fn alpha(&self) -> f32 {
        match &self.effect {
            TransitionEffect::Fade { .. } => {
                if self.progress < 0.5 {
                    1.0 - (self.progress * 2.0)
                } else {
                    (self.progress - 0.5) * 2.0
                }
            }
            _ => 1.0,
        }
    }

    /// Scale of the view along the flip axis
    ///
    /// For flips: goes 1.0 -> 0.0 at the midpoint (edge-on) -> 1.0.
    /// Other effects: always 1.0
    pub fn flip_scale(&self) -> f32 {
        match &self.effect {
            TransitionEffect::FlipVertical { .. } | TransitionEffect::FlipHorizontal { .. } => {
                (1.0 - self.progress * 2.0).abs()
            }
            _ => 1.0,
        }
    }

    /// Whether the destination scene is the one on screen
    pub fn shows_destination(&self) -> bool {
        self.progress >= 0.5
    }

    /// Check if transition is complete
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}
