use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::controllers::cli::args::SnapshotArgs;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_request::RenderRequest;
use crate::core::data::surface::{SurfaceError, SurfaceSize};
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::frame_renderer::{FrameRenderError, FrameRenderer};
use crate::core::fractals::mandelbrot::palette::PaletteError;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid image size: {0}")]
    Surface(#[from] SurfaceError),
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
    #[error("invalid view: {0}")]
    View(#[from] ViewStateError),
    #[error("render failed: {0}")]
    Render(#[from] FrameRenderError),
    #[error("no frame has been generated to write")]
    NothingRendered,
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders one frame headlessly and hands it to a file presenter.
pub struct SnapshotController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> SnapshotController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn generate(&mut self, args: &SnapshotArgs) -> Result<(), SnapshotError> {
        let config = args.config();
        let surface = SurfaceSize::new(args.width, args.height)?;
        let view = ViewState::from_config(&config)?;
        let renderer = FrameRenderer::from_config(&config)?;

        log::info!(
            "rendering {}x{} at ({}, {}) zoom {} with {} iterations",
            surface.width(),
            surface.height(),
            view.center_x(),
            view.center_y(),
            view.zoom(),
            view.max_iterations()
        );

        let start = Instant::now();
        let buffer = renderer.render(&RenderRequest::new(view, surface))?;
        log::info!("rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);

        Ok(())
    }

    /// Writes the last generated frame. Fails before [`Self::generate`] has succeeded.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let buffer = self.buffer.as_ref().ok_or(SnapshotError::NothingRendered)?;

        self.presenter.present(buffer, &filepath)?;
        log::info!("saved to {}", filepath.as_ref().display());

        Ok(())
    }
}
