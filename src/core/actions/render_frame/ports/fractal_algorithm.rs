use std::error::Error;

use crate::core::data::point::Point;

/// Per-pixel computation of a fractal value, independent of every other pixel.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
