use crate::core::data::surface::SurfaceSize;
use crate::core::data::view_state::ViewState;

/// A frozen snapshot of everything needed to render one frame.
///
/// Input that arrives while the frame renders mutates the live view, never this copy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub view: ViewState,
    pub surface: SurfaceSize,
}

impl RenderRequest {
    #[must_use]
    pub fn new(view: ViewState, surface: SurfaceSize) -> Self {
        Self { view, surface }
    }
}
