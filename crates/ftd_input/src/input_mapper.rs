//! Input mapping from raw window events
//!
//! Touch events are converted to scene-space [`TouchEvent`]s. On desktop
//! the left mouse button emulates a single finger: press begins a touch,
//! dragging moves it, release ends it. A handful of keys map to actions.

use ftd_math::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, TouchPhase};
use winit::keyboard::KeyCode;

use crate::touch::TouchEvent;
use crate::view::ViewTransform;

/// Finger identifier used for mouse-emulated touches
pub const MOUSE_TOUCH_ID: u64 = u64::MAX;

/// Actions triggered by keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Restart the chase from the result menu (R key)
    Restart,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw window input to touches and actions
pub struct InputMapper {
    /// Window → scene conversion
    view: ViewTransform,
    /// Whether the left button is held (mouse touch in progress)
    mouse_pressed: bool,
}

impl InputMapper {
    /// Create a mapper using the given view transform
    pub fn new(view: ViewTransform) -> Self {
        Self {
            view,
            mouse_pressed: false,
        }
    }

    /// The current view transform
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// Mutable access to the view transform (e.g. to follow the camera)
    pub fn view_mut(&mut self) -> &mut ViewTransform {
        &mut self.view
    }

    /// Map keyboard input to an action
    ///
    /// Only key presses produce actions.
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyR => Some(InputAction::Restart),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// Map a platform touch to a scene-space touch event
    pub fn map_touch(
        &self,
        id: u64,
        phase: TouchPhase,
        position: PhysicalPosition<f64>,
        scale_factor: f64,
    ) -> TouchEvent {
        let logical = position.to_logical::<f64>(scale_factor);
        let window = Vec2::new(logical.x as f32, logical.y as f32);
        TouchEvent::new(id, phase, self.view.to_scene(window))
    }

    /// Map a mouse button change at `cursor` (logical pixels) to a touch
    ///
    /// Returns `Some` for left button press (Started) and release (Ended).
    pub fn map_mouse_button(
        &mut self,
        button: MouseButton,
        state: ElementState,
        cursor: Vec2,
    ) -> Option<TouchEvent> {
        if button != MouseButton::Left {
            return None;
        }

        let phase = match (state, self.mouse_pressed) {
            (ElementState::Pressed, false) => {
                self.mouse_pressed = true;
                TouchPhase::Started
            }
            (ElementState::Released, true) => {
                self.mouse_pressed = false;
                TouchPhase::Ended
            }
            _ => return None,
        };
        Some(TouchEvent::new(MOUSE_TOUCH_ID, phase, self.view.to_scene(cursor)))
    }

    /// Map cursor movement (logical pixels) to a touch while dragging
    pub fn map_cursor_moved(&self, cursor: Vec2) -> Option<TouchEvent> {
        if !self.mouse_pressed {
            return None;
        }
        Some(TouchEvent::new(
            MOUSE_TOUCH_ID,
            TouchPhase::Moved,
            self.view.to_scene(cursor),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::new(ViewTransform::new(Vec2::new(800.0, 600.0), Vec2::ZERO))
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Exit)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::Restart)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released),
            None
        );
    }

    #[test]
    fn test_other_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::Space] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_touch_is_converted_to_scene() {
        let event = mapper().map_touch(
            3,
            TouchPhase::Moved,
            PhysicalPosition::new(1200.0, 600.0),
            2.0,
        );
        // Physical (1200, 600) at 2x is logical (600, 300): 200 right of centre
        assert_eq!(event.id, 3);
        assert_eq!(event.phase, TouchPhase::Moved);
        assert_eq!(event.location, Vec2::new(200.0, 0.0));
    }

    #[test]
    fn test_mouse_drag_emulates_touch() {
        let mut mapper = mapper();

        // Moving without a press is not a touch
        assert!(mapper.map_cursor_moved(Vec2::new(400.0, 300.0)).is_none());

        let began = mapper
            .map_mouse_button(MouseButton::Left, ElementState::Pressed, Vec2::new(400.0, 300.0))
            .unwrap();
        assert_eq!(began.phase, TouchPhase::Started);
        assert_eq!(began.id, MOUSE_TOUCH_ID);
        assert_eq!(began.location, Vec2::ZERO);

        let moved = mapper.map_cursor_moved(Vec2::new(400.0, 200.0)).unwrap();
        assert_eq!(moved.phase, TouchPhase::Moved);
        assert_eq!(moved.location, Vec2::new(0.0, 100.0));

        let ended = mapper
            .map_mouse_button(MouseButton::Left, ElementState::Released, Vec2::new(400.0, 200.0))
            .unwrap();
        assert_eq!(ended.phase, TouchPhase::Ended);

        assert!(mapper.map_cursor_moved(Vec2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_other_buttons_ignored() {
        let mut mapper = mapper();
        assert!(mapper
            .map_mouse_button(MouseButton::Right, ElementState::Pressed, Vec2::ZERO)
            .is_none());
    }

    #[test]
    fn test_release_without_press_ignored() {
        let mut mapper = mapper();
        assert!(mapper
            .map_mouse_button(MouseButton::Left, ElementState::Released, Vec2::ZERO)
            .is_none());
    }

    #[test]
    fn test_view_follows_camera() {
        let mut mapper = mapper();
        mapper.view_mut().set_camera(Vec2::new(50.0, 50.0));
        assert_eq!(mapper.view().camera, Vec2::new(50.0, 50.0));
    }
}
