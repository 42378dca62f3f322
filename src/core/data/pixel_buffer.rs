use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::surface::SurfaceSize;

pub const BYTES_PER_PIXEL: usize = 4;

fn surface_to_buffer_size(surface: SurfaceSize) -> usize {
    surface.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of {}x{} surface",
        .pixel.x, .pixel.y, .surface.width(), .surface.height()
    )]
    PixelOutsideBounds { pixel: Point, surface: SurfaceSize },
    #[error("surface size {surface_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        surface_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// A full frame of RGBA bytes in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    surface: SurfaceSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            buffer: vec![0; surface_to_buffer_size(surface)],
        }
    }

    pub fn from_data(
        surface: SurfaceSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let surface_size = surface_to_buffer_size(surface);

        if surface_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                surface_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { surface, buffer })
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.surface.contains_point(pixel) {
            return None;
        }

        let index = self.index_of(pixel);
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.surface.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                surface: self.surface,
            });
        }

        let index = self.index_of(pixel);
        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_rgba());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> usize {
        (pixel.y as usize * self.surface.width() as usize + pixel.x as usize) * BYTES_PER_PIXEL
    }
}
