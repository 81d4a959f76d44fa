use std::cmp::Ordering;

use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::point::Point;
use crate::core::viewport::bounds_for::bounds_for;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::recenter_on_zoom::recenter_on_zoom;
use crate::core::viewport::zoom::Zoom;

/// Centre and magnification of the visible region.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct ViewState {
    pub origin: Complex,
    pub zoom: Zoom,
}

impl ViewState {
    #[must_use]
    pub fn bounds(&self, canvas: CanvasSize) -> ComplexBounds {
        bounds_for(self.origin, self.zoom, canvas.aspect_ratio())
    }

    /// Applies one wheel gesture anchored at `cursor`.
    ///
    /// Positive deflection zooms in by one step, negative zooms out by one
    /// step, zero is ignored. Returns whether the view changed.
    pub fn apply_wheel(
        &mut self,
        deflection: f64,
        cursor: Point,
        canvas: CanvasSize,
    ) -> Result<bool, ViewportError> {
        let new_zoom = match deflection.partial_cmp(&0.0) {
            Some(Ordering::Greater) => self.zoom.zoom_in(),
            Some(Ordering::Less) => self.zoom.zoom_out(),
            _ => return Ok(false),
        };

        if new_zoom == self.zoom {
            return Ok(false);
        }

        let new_origin = recenter_on_zoom(self.origin, self.zoom, new_zoom, cursor, canvas)?;

        log::info!(
            "zoom {:.4} -> {:.4}, origin ({:.6}, {:.6})",
            self.zoom.value(),
            new_zoom.value(),
            new_origin.real,
            new_origin.imag
        );

        self.origin = new_origin;
        self.zoom = new_zoom;

        Ok(true)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
