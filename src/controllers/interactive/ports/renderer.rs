use crate::core::actions::cancellation::CancelToken;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::frame_renderer::{FrameRenderError, FrameRenderer};

/// Produces frames on the worker thread. A render that sees `cancel` fire must
/// return [`FrameRenderError::Cancelled`] rather than a partial frame.
pub trait InteractiveControllerRendererPort: Send + Sync {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, FrameRenderError>;
}

impl InteractiveControllerRendererPort for FrameRenderer {
    fn render(
        &self,
        request: &RenderRequest,
        cancel: &dyn CancelToken,
    ) -> Result<PixelBuffer, FrameRenderError> {
        let token = || cancel.is_cancelled();

        self.render_cancelable(request, &token)
    }
}
