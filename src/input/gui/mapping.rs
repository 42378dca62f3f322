//! Translation of winit window events into explorer input messages.
//!
//! Resizes are handled by the app directly since they also resize the framebuffer.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::Key;

use crate::controllers::explorer::{InputEvent, PointerPosition, WheelDirection};

#[must_use]
pub fn pointer_position(position: PhysicalPosition<f64>) -> PointerPosition {
    PointerPosition::new(position.x, position.y)
}

/// Positive vertical scroll zooms in. Horizontal-only scrolling is ignored.
#[must_use]
pub fn wheel_direction(delta: MouseScrollDelta) -> Option<WheelDirection> {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, dy) => f64::from(dy),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if dy > 0.0 {
        Some(WheelDirection::In)
    } else if dy < 0.0 {
        Some(WheelDirection::Out)
    } else {
        None
    }
}

/// The typed character of a key press, if it is a single character.
#[must_use]
pub fn key_char(key: &Key, state: ElementState) -> Option<char> {
    if state != ElementState::Pressed {
        return None;
    }

    match key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Maps one window event, using `cursor` for events that carry no position.
#[must_use]
pub fn map_window_event(event: &WindowEvent, cursor: PointerPosition) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::PointerMoved(pointer_position(*position)))
        }
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => Some(match state {
            ElementState::Pressed => InputEvent::PointerPressed(cursor),
            ElementState::Released => InputEvent::PointerReleased,
        }),
        WindowEvent::MouseWheel { delta, .. } => {
            wheel_direction(*delta).map(|direction| InputEvent::Wheel {
                position: cursor,
                direction,
            })
        }
        WindowEvent::KeyboardInput { event, .. } => {
            key_char(&event.logical_key, event.state).map(InputEvent::Key)
        }
        _ => None,
    }
}

/// Events egui may swallow when the pointer or focus is on its widgets.
/// Releases always reach the explorer so a drag cannot get stuck.
#[must_use]
pub fn is_capturable(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::PointerPressed(_) | InputEvent::Wheel { .. } | InputEvent::Key(_)
    )
}
