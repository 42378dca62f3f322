use thiserror::Error;

use crate::controllers::explorer::ExplorerController;
use crate::controllers::surface::ports::render_target::RenderTarget;
use crate::controllers::surface::session::SurfaceSession;
use crate::core::data::surface::{SurfaceError, SurfaceSize};
use crate::core::data::view_state::{ViewState, ViewStateError};
use crate::core::fractals::mandelbrot::frame_renderer::FrameRenderer;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::palette::PaletteError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LaunchError {
    #[error("invalid surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("invalid palette: {0}")]
    Palette(#[from] PaletteError),
    #[error("invalid view: {0}")]
    View(#[from] ViewStateError),
}

/// Starts an explorer on `target` with the default view and renders the first frame.
pub fn launch<T: RenderTarget>(
    target: T,
) -> Result<ExplorerController<SurfaceSession<T>>, LaunchError> {
    launch_with_config(target, &MandelbrotConfig::default())
}

pub fn launch_with_config<T: RenderTarget>(
    target: T,
    config: &MandelbrotConfig,
) -> Result<ExplorerController<SurfaceSession<T>>, LaunchError> {
    let (width, height) = target.surface_size();
    let surface = SurfaceSize::new(width, height)?;
    let renderer = FrameRenderer::from_config(config)?;
    let view = ViewState::from_config(config)?;

    log::info!(
        "launching explorer on {width}x{height} surface with {} palette entries",
        renderer.palette().len()
    );

    let mut controller = ExplorerController::new(view, surface, SurfaceSession::new(target, renderer))
        .with_zoom_factors(config.zoom_in_factor, config.zoom_out_factor);
    controller.refresh();

    Ok(controller)
}
