use std::time::Duration;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub pixel_buffer: PixelBuffer,
    /// View the frame was rendered from. The HUD describes this view while the frame is shown.
    pub view: ViewState,
    pub render_duration: Duration,
}
