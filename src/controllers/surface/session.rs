use std::time::Instant;

use crate::controllers::explorer::FrameRequestPort;
use crate::controllers::surface::ports::render_target::RenderTarget;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::frame_renderer::FrameRenderer;

/// Renders requested frames inline and hands them to the host target.
pub struct SurfaceSession<T: RenderTarget> {
    target: T,
    renderer: FrameRenderer,
    frames_presented: u64,
    last_error: Option<String>,
}

impl<T: RenderTarget> SurfaceSession<T> {
    pub fn new(target: T, renderer: FrameRenderer) -> Self {
        Self {
            target,
            renderer,
            frames_presented: 0,
            last_error: None,
        }
    }

    #[must_use]
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Message of the most recent failed render, cleared by the next success.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl<T: RenderTarget> FrameRequestPort for SurfaceSession<T> {
    fn request_frame(&mut self, request: RenderRequest) {
        let start = Instant::now();

        let frame = match self.renderer.render(&request) {
            Ok(frame) => frame,
            Err(err) => {
                log::error!("frame render failed: {err}");
                self.last_error = Some(err.to_string());
                return;
            }
        };

        self.target.present(&frame);
        self.frames_presented += 1;
        self.last_error = None;

        log::debug!(
            "presented {}x{} frame at {} iterations in {:?}",
            request.surface.width(),
            request.surface.height(),
            request.view.max_iterations(),
            start.elapsed()
        );

        if let Err(err) = self.target.draw_overlay(&request.view.overlay_text()) {
            log::warn!("{err}");
        }
    }
}
