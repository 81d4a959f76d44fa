use crate::core::viewport::errors::ViewportError;

pub const MIN_ZOOM: f64 = 1.0;
/// Fraction of the current zoom added or removed per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

/// Magnification of the view. 1.0 shows the default span and is the floor.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    pub const DEFAULT: Self = Self(MIN_ZOOM);

    pub fn new(value: f64) -> Result<Self, ViewportError> {
        if !value.is_finite() || value < MIN_ZOOM {
            return Err(ViewportError::InvalidZoom { value });
        }

        Ok(Self(value))
    }

    /// Like [`Zoom::new`] but clamps out of range values to the nearest valid
    /// zoom. NaN becomes the floor.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::DEFAULT;
        }

        Self(value.clamp(MIN_ZOOM, f64::MAX))
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::clamped(self.0 + ZOOM_STEP * self.0)
    }

    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::clamped(self.0 - ZOOM_STEP * self.0)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::DEFAULT
    }
}
