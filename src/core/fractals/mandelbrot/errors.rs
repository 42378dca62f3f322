use thiserror::Error;

use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotError {
    #[error(
        "pixel (x: {}, y: {}) is outside the {}x{} surface",
        .pixel.x, .pixel.y, .surface.width(), .surface.height()
    )]
    PixelOutsideSurface { pixel: Point, surface: SurfaceSize },
}
