use std::ops::{Add, Mul};

/// A point in the complex plane, also used for plane coordinates of the view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    #[must_use]
    pub fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}
