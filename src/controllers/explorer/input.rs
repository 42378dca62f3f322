use crate::core::data::surface::SurfaceSize;

/// Pointer location in surface pixels; may be fractional on high-DPI hosts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WheelDirection {
    /// Scrolling toward the content, magnifying it.
    In,
    Out,
}

/// Discrete input delivered by the host, consumed in arrival order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerPressed(PointerPosition),
    PointerMoved(PointerPosition),
    PointerReleased,
    Wheel {
        position: PointerPosition,
        direction: WheelDirection,
    },
    Key(char),
    Resized(SurfaceSize),
}
