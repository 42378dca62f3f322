//! Defaults and limits for exploring the Mandelbrot set.

use crate::core::data::complex::Complex;

pub const DEFAULT_CENTER: Complex = Complex { real: -0.5, imag: 0.0 };
pub const DEFAULT_ZOOM: f64 = 200.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

pub const MIN_MAX_ITERATIONS: u32 = 20;
pub const MAX_MAX_ITERATIONS: u32 = 1000;
pub const ITERATION_STEP: u32 = 20;

pub const PALETTE_SIZE: usize = 1000;

pub const ZOOM_IN_FACTOR: f64 = 1.2;
pub const ZOOM_OUT_FACTOR: f64 = 0.8;

pub const DEFAULT_SURFACE_WIDTH: u32 = 800;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 600;

/// Inclusive range the iteration bound may move within, and the size of one adjustment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IterationBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

impl Default for IterationBounds {
    fn default() -> Self {
        Self {
            min: MIN_MAX_ITERATIONS,
            max: MAX_MAX_ITERATIONS,
            step: ITERATION_STEP,
        }
    }
}

impl IterationBounds {
    /// Bounds are usable when the range is non-empty and each step moves the count.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.step > 0 && self.min <= self.max
    }

    #[must_use]
    pub fn clamp(&self, max_iterations: u32) -> u32 {
        max_iterations.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, max_iterations: u32) -> bool {
        (self.min..=self.max).contains(&max_iterations)
    }

    #[must_use]
    pub fn increase(&self, max_iterations: u32) -> u32 {
        max_iterations.saturating_add(self.step).min(self.max)
    }

    #[must_use]
    pub fn decrease(&self, max_iterations: u32) -> u32 {
        max_iterations.saturating_sub(self.step).max(self.min)
    }
}

/// Session-wide settings shared by every entry point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MandelbrotConfig {
    pub center: Complex,
    pub zoom: f64,
    pub max_iterations: u32,
    pub iteration_bounds: IterationBounds,
    pub palette_size: usize,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            iteration_bounds: IterationBounds::default(),
            palette_size: PALETTE_SIZE,
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_clamps_at_upper_bound() {
        let bounds = IterationBounds::default();

        assert_eq!(bounds.increase(100), 120);
        assert_eq!(bounds.increase(990), 1000);
        assert_eq!(bounds.increase(1000), 1000);
    }

    #[test]
    fn decrease_clamps_at_lower_bound() {
        let bounds = IterationBounds::default();

        assert_eq!(bounds.decrease(100), 80);
        assert_eq!(bounds.decrease(30), 20);
        assert_eq!(bounds.decrease(20), 20);
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = IterationBounds::default();

        assert!(bounds.contains(20));
        assert!(bounds.contains(1000));
        assert!(!bounds.contains(19));
        assert!(!bounds.contains(1001));
    }

    #[test]
    fn zero_step_and_inverted_ranges_are_invalid() {
        assert!(IterationBounds::default().is_valid());
        assert!(!IterationBounds { min: 20, max: 1000, step: 0 }.is_valid());
        assert!(!IterationBounds { min: 500, max: 100, step: 20 }.is_valid());
    }

    #[test]
    fn clamp_pulls_counts_into_range() {
        let bounds = IterationBounds { min: 200, max: 400, step: 20 };

        assert_eq!(bounds.clamp(100), 200);
        assert_eq!(bounds.clamp(300), 300);
        assert_eq!(bounds.clamp(900), 400);
    }
}
