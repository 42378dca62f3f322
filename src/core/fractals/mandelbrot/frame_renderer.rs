use std::convert::Infallible;
use std::sync::Arc;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame_parallel, render_frame_parallel_cancelable,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::palette::{ColourPalette, PaletteError};

pub type FrameRenderError = RenderFrameError<MandelbrotError, Infallible>;

/// Turns render requests into full RGBA frames using one session-wide palette.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    palette: Arc<ColourPalette>,
}

impl FrameRenderer {
    #[must_use]
    pub fn new(palette: Arc<ColourPalette>) -> Self {
        Self { palette }
    }

    pub fn from_config(config: &MandelbrotConfig) -> Result<Self, PaletteError> {
        Ok(Self::new(Arc::new(ColourPalette::new(config.palette_size)?)))
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<ColourPalette> {
        &self.palette
    }

    pub fn render(&self, request: &RenderRequest) -> Result<PixelBuffer, FrameRenderError> {
        let (algorithm, colour_map) = self.pipeline(request);

        render_frame_parallel(request.surface, &algorithm, &colour_map)
    }

    pub fn render_cancelable<C: CancelToken>(
        &self,
        request: &RenderRequest,
        cancel: &C,
    ) -> Result<PixelBuffer, FrameRenderError> {
        let (algorithm, colour_map) = self.pipeline(request);

        render_frame_parallel_cancelable(request.surface, &algorithm, &colour_map, cancel)
    }

    fn pipeline(&self, request: &RenderRequest) -> (MandelbrotAlgorithm, PaletteColourMap) {
        (
            MandelbrotAlgorithm::new(*request),
            PaletteColourMap::new(Arc::clone(&self.palette), request.view.max_iterations()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::render_frame::render_frame::render_frame_serial;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;
    use crate::core::data::surface::SurfaceSize;
    use crate::core::data::view_state::ViewState;
    use crate::core::fractals::mandelbrot::algorithm::escape;

    fn renderer() -> FrameRenderer {
        FrameRenderer::from_config(&MandelbrotConfig::default()).unwrap()
    }

    fn default_request() -> RenderRequest {
        RenderRequest::new(ViewState::default(), SurfaceSize::new(800, 600).unwrap())
    }

    #[test]
    fn from_config_builds_full_palette() {
        assert_eq!(renderer().palette().len(), 1000);
    }

    #[test]
    fn default_view_paints_center_black_and_corner_coloured() {
        let frame = renderer().render(&default_request()).unwrap();

        assert_eq!(frame.buffer_size(), 800 * 600 * 4);
        assert_eq!(frame.pixel(Point { x: 400, y: 300 }), Some(Colour::BLACK));

        let corner = frame.pixel(Point { x: 0, y: 0 }).unwrap();
        let palette = renderer().palette().clone();
        let expected = palette.colour_for(escape(-2.5, -1.5, 100));
        assert_eq!(corner, expected);
    }

    #[test]
    fn every_pixel_is_opaque() {
        let request = RenderRequest::new(ViewState::default(), SurfaceSize::new(64, 48).unwrap());
        let frame = renderer().render(&request).unwrap();

        assert!(frame.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }

    #[test]
    fn parallel_frame_matches_serial_frame() {
        let request = RenderRequest::new(ViewState::default(), SurfaceSize::new(80, 60).unwrap());
        let renderer = renderer();
        let (algorithm, colour_map) = renderer.pipeline(&request);

        let serial = render_frame_serial(request.surface, &algorithm, &colour_map).unwrap();
        let parallel = renderer.render_cancelable(&request, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn cancelled_render_is_reported() {
        let request = RenderRequest::new(ViewState::default(), SurfaceSize::new(80, 60).unwrap());

        let result = renderer().render_cancelable(&request, &|| true);

        assert!(matches!(result, Err(RenderFrameError::Cancelled(_))));
    }
}
