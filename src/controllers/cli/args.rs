use std::path::PathBuf;

use clap::Parser;

use crate::core::data::complex::Complex;
use crate::core::fractals::mandelbrot::mandelbrot_config::{
    DEFAULT_CENTER, DEFAULT_MAX_ITERATIONS, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH,
    DEFAULT_ZOOM, MandelbrotConfig,
};

/// Renders a single Mandelbrot frame and saves it as a binary PPM image.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot_explorer")]
#[command(version)]
#[command(about = "Render one view of the Mandelbrot set to a PPM file", long_about = None)]
pub struct SnapshotArgs {
    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    pub height: u32,

    /// Real part of the plane point at the image center
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_negative_numbers = true)]
    pub center_x: f64,

    /// Imaginary part of the plane point at the image center
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_negative_numbers = true)]
    pub center_y: f64,

    /// Pixels per plane unit
    #[arg(long, default_value_t = DEFAULT_ZOOM)]
    pub zoom: f64,

    /// Iteration bound before a point counts as inside the set
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,
}

impl SnapshotArgs {
    /// Session config with the view taken from the command line.
    #[must_use]
    pub fn config(&self) -> MandelbrotConfig {
        MandelbrotConfig {
            center: Complex::new(self.center_x, self.center_y),
            zoom: self.zoom,
            max_iterations: self.max_iterations,
            ..MandelbrotConfig::default()
        }
    }
}
