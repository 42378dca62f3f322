/// User events delivered to the winit event loop from other threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The render worker finished a frame or failed one. The presenter picks
    /// the result up on the next redraw.
    Wake,
}
