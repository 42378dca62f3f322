use thiserror::Error;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::OverlayText;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("overlay text could not be drawn: {reason}")]
pub struct OverlayError {
    pub reason: String,
}

impl OverlayError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The host's drawing surface.
pub trait RenderTarget {
    /// Width and height of the surface in pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Replaces the whole displayed surface with `frame`.
    fn present(&mut self, frame: &PixelBuffer);

    fn draw_overlay(&mut self, overlay: &OverlayText) -> Result<(), OverlayError>;
}
