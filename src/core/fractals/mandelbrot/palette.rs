use std::f64::consts::PI;

use thiserror::Error;

use crate::core::data::colour::Colour;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("colour palette must contain at least one entry")]
    Empty,
}

/// Builds a cyclic ramp of `size` colours from three phase-shifted sine waves.
///
/// Negative sine lobes clamp to zero, so each channel fades out for a third
/// of the cycle instead of wrapping around.
#[must_use]
pub fn generate_palette(size: usize) -> Vec<Colour> {
    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            let angle = 2.0 * PI * t;

            Colour::opaque(
                channel(angle),
                channel(angle + 2.0 * PI / 3.0),
                channel(angle + 4.0 * PI / 3.0),
            )
        })
        .collect()
}

fn channel(angle: f64) -> u8 {
    (255.0 * angle.sin()).floor().clamp(0.0, 255.0) as u8
}

/// An immutable colour ramp indexed by smooth escape values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourPalette {
    entries: Vec<Colour>,
}

impl ColourPalette {
    pub fn new(size: usize) -> Result<Self, PaletteError> {
        if size == 0 {
            return Err(PaletteError::Empty);
        }

        Ok(Self {
            entries: generate_palette(size),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Colour] {
        &self.entries
    }

    /// Index of the entry for a smooth escape value, wrapping around the ramp.
    #[must_use]
    pub fn index_for(&self, value: f64) -> usize {
        let len = self.entries.len();
        let wrapped = value.rem_euclid(len as f64);

        if !wrapped.is_finite() {
            return 0;
        }

        // rem_euclid can round up to exactly `len` for tiny negative inputs
        (wrapped.floor() as usize).min(len - 1)
    }

    #[must_use]
    pub fn colour_for(&self, value: f64) -> Colour {
        self.entries[self.index_for(value)]
    }
}
