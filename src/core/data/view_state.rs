use std::fmt;

use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::surface::SurfaceSize;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_CENTER, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM, IterationBounds, MandelbrotConfig,
};

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewStateError {
    #[error("zoom must be finite and greater than zero, got {zoom}")]
    InvalidZoom { zoom: f64 },
    #[error("view center must be finite, got ({real}, {imag})")]
    NonFiniteCenter { real: f64, imag: f64 },
    #[error("iteration bounds [{min}, {max}] with step {step} are invalid")]
    InvalidBounds { min: u32, max: u32, step: u32 },
    #[error("max iterations {max_iterations} outside of [{min}, {max}]")]
    IterationsOutOfBounds { max_iterations: u32, min: u32, max: u32 },
}

/// What part of the plane is on screen and how deep points are iterated.
///
/// `zoom` is measured in pixels per plane unit and is always finite and positive.
/// `max_iterations` always stays within the configured [`IterationBounds`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
    bounds: IterationBounds,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bounds: IterationBounds::default(),
        }
    }
}

impl ViewState {
    pub fn new(
        center_x: f64,
        center_y: f64,
        zoom: f64,
        max_iterations: u32,
    ) -> Result<Self, ViewStateError> {
        Self::with_bounds(center_x, center_y, zoom, max_iterations, IterationBounds::default())
    }

    pub fn with_bounds(
        center_x: f64,
        center_y: f64,
        zoom: f64,
        max_iterations: u32,
        bounds: IterationBounds,
    ) -> Result<Self, ViewStateError> {
        let center = Complex::new(center_x, center_y);

        if !center.is_finite() {
            return Err(ViewStateError::NonFiniteCenter {
                real: center_x,
                imag: center_y,
            });
        }

        if !is_valid_zoom(zoom) {
            return Err(ViewStateError::InvalidZoom { zoom });
        }

        if !bounds.is_valid() {
            return Err(ViewStateError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
                step: bounds.step,
            });
        }

        if !bounds.contains(max_iterations) {
            return Err(ViewStateError::IterationsOutOfBounds {
                max_iterations,
                min: bounds.min,
                max: bounds.max,
            });
        }

        Ok(Self {
            center,
            zoom,
            max_iterations,
            bounds,
        })
    }

    pub fn from_config(config: &MandelbrotConfig) -> Result<Self, ViewStateError> {
        Self::with_bounds(
            config.center.real,
            config.center.imag,
            config.zoom,
            config.max_iterations,
            config.iteration_bounds,
        )
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center.real
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center.imag
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bounds(&self) -> IterationBounds {
        self.bounds
    }

    /// Maps a (possibly fractional) pixel position to the plane point drawn there.
    #[must_use]
    pub fn to_plane(&self, pixel_x: f64, pixel_y: f64, surface: SurfaceSize) -> Complex {
        Complex {
            real: self.center.real + (pixel_x - surface.half_width()) / self.zoom,
            imag: self.center.imag + (pixel_y - surface.half_height()) / self.zoom,
        }
    }

    /// Scales the view by `factor` while keeping the plane point under
    /// `(pixel_x, pixel_y)` fixed on screen.
    ///
    /// Returns `false` and leaves the view untouched when the factor or the
    /// resulting zoom is not finite and positive.
    pub fn zoom_toward_point(
        &mut self,
        pixel_x: f64,
        pixel_y: f64,
        surface: SurfaceSize,
        factor: f64,
    ) -> bool {
        let zoom = self.zoom * factor;

        if !is_valid_zoom(factor) || !is_valid_zoom(zoom) {
            log::debug!("ignoring zoom by {factor}: zoom {} would become {zoom}", self.zoom);
            return false;
        }

        let anchor = self.to_plane(pixel_x, pixel_y, surface);
        let center = Complex {
            real: anchor.real - (pixel_x - surface.half_width()) / zoom,
            imag: anchor.imag - (pixel_y - surface.half_height()) / zoom,
        };

        if !center.is_finite() {
            return false;
        }

        self.zoom = zoom;
        self.center = center;
        true
    }

    /// Moves the view so the content follows a pointer dragged by `(dx, dy)` pixels.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        let center = Complex {
            real: self.center.real - dx / self.zoom,
            imag: self.center.imag - dy / self.zoom,
        };

        if !center.is_finite() {
            return false;
        }

        self.center = center;
        true
    }

    pub fn increase_iterations(&mut self) {
        self.max_iterations = self.bounds.increase(self.max_iterations);
    }

    pub fn decrease_iterations(&mut self) {
        self.max_iterations = self.bounds.decrease(self.max_iterations);
    }

    /// Returns to the startup center and zoom. The default iteration count is
    /// pulled into this view's bounds.
    pub fn reset(&mut self) {
        *self = Self {
            max_iterations: self.bounds.clamp(DEFAULT_MAX_ITERATIONS),
            bounds: self.bounds,
            ..Self::default()
        };
    }

    #[must_use]
    pub fn overlay_text(&self) -> OverlayText {
        OverlayText {
            center: self.center,
            zoom: self.zoom,
            max_iterations: self.max_iterations,
        }
    }
}

fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

/// The status lines shown on top of a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OverlayText {
    center: Complex,
    zoom: f64,
    max_iterations: u32,
}

impl OverlayText {
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!(
                "Center: ({:.10}, {:.10})",
                self.center.real, self.center.imag
            ),
            format!("Zoom: {:.2}", self.zoom),
            format!("Max Iterations: {}", self.max_iterations),
        ]
    }
}

impl fmt::Display for OverlayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
