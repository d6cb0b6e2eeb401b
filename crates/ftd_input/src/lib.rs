//! Touch Input Handling
//!
//! This crate turns window input into the single steering target the chase
//! scene needs: the last touch point, in scene coordinates.

mod input_mapper;
mod touch;
mod view;

pub use input_mapper::{InputAction, InputMapper, MOUSE_TOUCH_ID};
pub use touch::{TouchEvent, TouchTracker};
pub use view::ViewTransform;

pub use winit::event::TouchPhase;
