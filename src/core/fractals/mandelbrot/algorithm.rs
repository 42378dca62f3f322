use std::f64::consts::LN_2;

use crate::core::actions::render_frame::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Keeps smooth values strictly below the iteration bound, which marks "inside".
const SMOOTH_EPSILON: f64 = 1e-9;

/// Iterates `z = z² + c` from zero and returns a smooth escape count.
///
/// Points that stay bounded for `max_iterations` steps return exactly
/// `max_iterations`. Escaped points return a fractional value in
/// `[0, max_iterations)` refined with the normalized iteration count.
#[must_use]
pub fn escape(cx: f64, cy: f64, max_iterations: u32) -> f64 {
    let c = Complex::new(cx, cy);
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z * z + c;
        iteration += 1;
    }

    let bound = f64::from(max_iterations);

    if iteration >= max_iterations {
        return bound;
    }

    smooth_iteration(iteration, z.magnitude_squared())
        .map_or(bound, |value| value.min(bound - SMOOTH_EPSILON).max(0.0))
}

/// `None` when the logarithms are undefined; callers treat that as inside the set.
fn smooth_iteration(iteration: u32, magnitude_squared: f64) -> Option<f64> {
    if !magnitude_squared.is_finite() || magnitude_squared <= 0.0 {
        return None;
    }

    let log_zn = magnitude_squared.ln() / 2.0;

    if log_zn <= 0.0 {
        return None;
    }

    let nu = (log_zn / LN_2).ln() / LN_2;
    let value = f64::from(iteration) + 1.0 - nu;

    value.is_finite().then_some(value)
}

/// Escape-time computation bound to one frame's view and surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    request: RenderRequest,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(request: RenderRequest) -> Self {
        Self { request }
    }

    #[must_use]
    pub fn request(&self) -> RenderRequest {
        self.request
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.request.view.max_iterations()
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = f64;
    type Failure = MandelbrotError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let RenderRequest { view, surface } = self.request;

        if !surface.contains_point(pixel) {
            return Err(MandelbrotError::PixelOutsideSurface { pixel, surface });
        }

        let c = view.to_plane(f64::from(pixel.x), f64::from(pixel.y), surface);

        Ok(escape(c.real, c.imag, view.max_iterations()))
    }
}
