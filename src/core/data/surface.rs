use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("surface size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Dimensions of the drawing surface a frame is rendered for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SurfaceSize {
    width: u32,
    height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn half_width(&self) -> f64 {
        f64::from(self.width) / 2.0
    }

    #[must_use]
    pub fn half_height(&self) -> f64 {
        f64::from(self.height) / 2.0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_new_valid() {
        let surface = SurfaceSize::new(800, 600).unwrap();

        assert_eq!(surface.width(), 800);
        assert_eq!(surface.height(), 600);
        assert_eq!(surface.half_width(), 400.0);
        assert_eq!(surface.half_height(), 300.0);
        assert_eq!(surface.pixel_count(), 480_000);
    }

    #[test]
    fn test_surface_rejects_zero_dimensions() {
        assert_eq!(
            SurfaceSize::new(0, 600),
            Err(SurfaceError::InvalidSize { width: 0, height: 600 })
        );
        assert_eq!(
            SurfaceSize::new(800, 0),
            Err(SurfaceError::InvalidSize { width: 800, height: 0 })
        );
        assert!(SurfaceSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_surface_contains_point() {
        let surface = SurfaceSize::new(10, 5).unwrap();

        assert!(surface.contains_point(Point { x: 0, y: 0 }));
        assert!(surface.contains_point(Point { x: 9, y: 4 }));
        assert!(!surface.contains_point(Point { x: 10, y: 4 }));
        assert!(!surface.contains_point(Point { x: 9, y: 5 }));
        assert!(!surface.contains_point(Point { x: -1, y: 0 }));
    }
}
