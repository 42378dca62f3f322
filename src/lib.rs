mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::{SnapshotArgs, SnapshotController, SnapshotError};
pub use controllers::explorer::{
    ExplorerController, FrameRequestPort, InputEvent, PointerPosition, WheelDirection,
};
pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort,
    InteractiveControllerRendererPort, RenderError,
    RenderEvent,
};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::surface::{
    LaunchError, OverlayError, RenderTarget, SurfaceSession, launch, launch_with_config,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame_parallel, render_frame_parallel_cancelable,
    render_frame_serial,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::render_request::RenderRequest;
pub use crate::core::data::surface::{SurfaceError, SurfaceSize};
pub use crate::core::data::view_state::{OverlayText, ViewState, ViewStateError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape};
pub use crate::core::fractals::mandelbrot::colour_map::PaletteColourMap;
pub use crate::core::fractals::mandelbrot::frame_renderer::{FrameRenderError, FrameRenderer};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{IterationBounds, MandelbrotConfig};
pub use crate::core::fractals::mandelbrot::palette::{ColourPalette, PaletteError, generate_palette};
pub use presenters::file::ppm::{PpmFilePresenter, encode_ppm};

#[cfg(feature = "gui")]
pub use input::gui::{GuiError, RunGuiCommand};
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
