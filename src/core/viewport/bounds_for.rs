use crate::core::data::complex::Complex;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::viewport::zoom::Zoom;

/// Half of the imaginary span shown at zoom 1.0.
pub const BASE_HALF_HEIGHT: f64 = 2.0;

/// Rectangle of the complex plane centred on `origin`.
///
/// The half-height is `2 / zoom` and the half-width is `2 * aspect_ratio /
/// zoom`, so doubling the zoom halves both spans.
#[must_use]
pub fn bounds_for(origin: Complex, zoom: Zoom, aspect_ratio: f64) -> ComplexBounds {
    let half_height = BASE_HALF_HEIGHT / zoom.value();
    let half_width = BASE_HALF_HEIGHT * aspect_ratio / zoom.value();

    ComplexBounds {
        left: origin.real - half_width,
        right: origin.real + half_width,
        top: origin.imag + half_height,
        bottom: origin.imag - half_height,
    }
}
