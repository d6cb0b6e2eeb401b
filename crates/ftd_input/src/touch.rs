//! Touch capture
//!
//! The chase scene only ever cares about one point: where the most recent
//! touch notification put the first finger. Began, moved and ended are all
//! treated alike, so lifting the finger leaves the player heading for the
//! last point it touched.

use ftd_math::Vec2;
use winit::event::TouchPhase;

/// A single touch notification in scene coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// Finger identifier reported by the platform
    pub id: u64,
    /// Phase of the touch (began, moved, ended, cancelled)
    pub phase: TouchPhase,
    /// Location in scene coordinates
    pub location: Vec2,
}

impl TouchEvent {
    /// Create a touch event
    pub fn new(id: u64, phase: TouchPhase, location: Vec2) -> Self {
        Self { id, phase, location }
    }
}

/// Tracks the last touch point
///
/// At most one point is held. It is overwritten by every notification and
/// never decays while input is idle.
#[derive(Clone, Debug, Default)]
pub struct TouchTracker {
    last_touch: Option<Vec2>,
}

impl TouchTracker {
    /// Create a tracker with no touch recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a batch of touches delivered in one notification
    ///
    /// The first touch wins. An empty batch clears the point, matching a
    /// notification that carries no touches at all.
    pub fn record(&mut self, touches: &[TouchEvent]) {
        self.last_touch = touches.first().map(|t| t.location);
        log::trace!("Last touch: {:?}", self.last_touch);
    }

    /// Record a single touch notification
    pub fn record_one(&mut self, touch: TouchEvent) {
        self.record(std::slice::from_ref(&touch));
    }

    /// The most recent touch point, if any
    #[inline]
    pub fn last_touch(&self) -> Option<Vec2> {
        self.last_touch
    }

    /// Forget the recorded point
    pub fn clear(&mut self) {
        self.last_touch = None;
    }
}
