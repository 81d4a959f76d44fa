use crate::core::data::complex::Complex;

/// A pixel is bounded while its iterate stays strictly inside this radius.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Constant term written over an escaped pixel's `c`. With the iterate reset
/// to zero, every following step yields this value, which is never bounded.
pub const ESCAPED_FIELD: Complex = Complex {
    real: 2.0 * ESCAPE_RADIUS,
    imag: 0.0,
};

/// Advances one pixel by one iteration.
///
/// Bounded results replace the iterate and bump the count. An escaping pixel
/// has its iterate zeroed and its field replaced with [`ESCAPED_FIELD`], so
/// it stops counting and its values stay finite.
#[inline]
pub fn step(field: &mut Complex, iterate: &mut Complex, count: &mut u32) {
    let folded = iterate.fold();
    let next = folded * folded + *field;

    // NaN compares false and is treated as escaped.
    if next.magnitude() < ESCAPE_RADIUS {
        *iterate = next;
        *count += 1;
    } else {
        *iterate = Complex::ZERO;
        *field = ESCAPED_FIELD;
    }
}
