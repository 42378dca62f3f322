use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::view_state::ViewState;

/// Decides which worker frames may replace the one on screen.
///
/// A frame is shown only if it is newer than the last one shown and was
/// rendered for the current framebuffer size. Frames can arrive late when a
/// resize or a burst of input overtakes the worker.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FrameFilter {
    last_presented_generation: u64,
    presented_view: Option<ViewState>,
}

impl FrameFilter {
    #[must_use]
    pub fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    /// View of the frame on screen, if any frame has been accepted.
    #[must_use]
    pub fn presented_view(&self) -> Option<ViewState> {
        self.presented_view
    }

    /// Records `frame` as presented if it passes.
    pub fn accept_frame(&mut self, frame: &FrameData, target_size: (u32, u32)) -> bool {
        let surface = frame.pixel_buffer.surface();

        if frame.generation <= self.last_presented_generation
            || (surface.width(), surface.height()) != target_size
        {
            return false;
        }

        self.last_presented_generation = frame.generation;
        self.presented_view = Some(frame.view);
        true
    }

    /// Errors older than the frame on screen are stale.
    #[must_use]
    pub fn accept_error(&self, generation: u64) -> bool {
        generation >= self.last_presented_generation
    }
}
