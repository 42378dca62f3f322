use std::convert::Infallible;
use std::sync::Arc;

use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::palette::ColourPalette;

/// Colours escaped points from the shared palette and paints the set itself black.
#[derive(Debug, Clone)]
pub struct PaletteColourMap {
    palette: Arc<ColourPalette>,
    max_iterations: u32,
}

impl PaletteColourMap {
    #[must_use]
    pub fn new(palette: Arc<ColourPalette>, max_iterations: u32) -> Self {
        Self {
            palette,
            max_iterations,
        }
    }
}

impl ColourMap for PaletteColourMap {
    type T = f64;
    type Failure = Infallible;

    fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
        if !value.is_finite() || value >= f64::from(self.max_iterations) {
            return Ok(Colour::BLACK);
        }

        Ok(self.palette.colour_for(value))
    }
}
