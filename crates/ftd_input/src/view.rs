//! Window to scene coordinate conversion
//!
//! Window coordinates have their origin at the top-left corner with y
//! growing downward. Scene coordinates are centred on the camera with y
//! growing upward.

use ftd_math::Vec2;

/// Maps points between window pixels and scene units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Viewport size in logical pixels
    pub viewport: Vec2,
    /// Scene position at the centre of the viewport
    pub camera: Vec2,
    /// Pixels per scene unit
    pub scale: f32,
}

impl ViewTransform {
    /// Create a transform for a viewport centred on `camera` at 1:1 scale
    pub fn new(viewport: Vec2, camera: Vec2) -> Self {
        Self {
            viewport,
            camera,
            scale: 1.0,
        }
    }

    /// Set the number of pixels per scene unit
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = if scale > 0.0 { scale } else { 1.0 };
        self
    }

    /// Follow a new camera position
    pub fn set_camera(&mut self, camera: Vec2) {
        self.camera = camera;
    }

    /// Convert a window point (logical pixels) to scene coordinates
    pub fn to_scene(&self, window: Vec2) -> Vec2 {
        let centred = Vec2::new(
            window.x - self.viewport.x * 0.5,
            self.viewport.y * 0.5 - window.y,
        );
        self.camera + centred / self.scale
    }

    /// Convert a scene point to window coordinates (logical pixels)
    pub fn to_window(&self, scene: Vec2) -> Vec2 {
        let offset = (scene - self.camera) * self.scale;
        Vec2::new(
            offset.x + self.viewport.x * 0.5,
            self.viewport.y * 0.5 - offset.y,
        )
    }
}
