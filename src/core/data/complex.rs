use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    /// Euclidean norm, computed without intermediate overflow.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    /// Reflects the value into the quadrant with non-negative real part and
    /// non-positive imaginary part.
    ///
    /// Squaring the folded value is the Burning Ship step. The negative
    /// imaginary half is used so the ship renders upright when row 0 of the
    /// canvas is the greatest imaginary part.
    #[must_use]
    pub fn fold(self) -> Self {
        Self {
            real: self.real.abs(),
            imag: -self.imag.abs(),
        }
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

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
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

#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_magnitude() {
        let c = Complex {
            real: 3.0,
            imag: -4.0,
        };
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_does_not_overflow_for_large_parts() {
        let c = Complex {
            real: 1e200,
            imag: 1e200,
        };
        assert!(c.magnitude().is_finite());
    }

    #[test]
    fn test_sub() {
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: -4.0,
        };
        let result = a - b;
        assert_eq!(result.real, -2.0);
        assert_eq!(result.imag, 6.0);
    }

    #[test]
    fn test_scale() {
        let c = Complex {
            real: 1.5,
            imag: -2.0,
        };
        assert_eq!(
            c.scale(2.0),
            Complex {
                real: 3.0,
                imag: -4.0
            }
        );
    }

    #[test]
    fn test_fold_every_quadrant_lands_in_the_same_quadrant() {
        let expected = Complex {
            real: 1.0,
            imag: -2.0,
        };

        for (real, imag) in [(1.0, 2.0), (-1.0, 2.0), (-1.0, -2.0), (1.0, -2.0)] {
            assert_eq!(Complex { real, imag }.fold(), expected);
        }
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let a = Complex {
            real: 1.0,
            imag: 2.0,
        };
        let b = Complex {
            real: 3.0,
            imag: 4.0,
        };
        let result = a * b;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, 10.0);
    }

    #[test]
    fn test_square_of_folded_value() {
        // (2 - 3i)² = 4 - 12i + 9i² = -5 - 12i
        let c = Complex {
            real: -2.0,
            imag: 3.0,
        }
        .fold();
        let result = c * c;
        assert_eq!(result.real, -5.0);
        assert_eq!(result.imag, -12.0);
    }
}
