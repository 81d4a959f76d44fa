use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::complex_bounds::ComplexBounds;
use crate::core::data::point::Point;
use crate::core::viewport::errors::ViewportError;

/// Maps a canvas pixel to the complex value it samples.
///
/// Column 0 maps to `bounds.left` and column `width - 1` to `bounds.right`;
/// row 0 maps to `bounds.top` and row `height - 1` to `bounds.bottom`.
pub fn pixel_to_complex(
    pixel: Point,
    bounds: ComplexBounds,
    canvas: CanvasSize,
) -> Result<Complex, ViewportError> {
    if !canvas.contains_point(pixel) {
        return Err(ViewportError::PixelOutsideCanvas {
            pixel,
            width: canvas.width(),
            height: canvas.height(),
        });
    }

    Ok(pixel_to_complex_unchecked(
        pixel.x as u32,
        pixel.y as u32,
        bounds,
        canvas,
    ))
}

/// Caller guarantees `x < width` and `y < height`.
#[inline]
pub(crate) fn pixel_to_complex_unchecked(
    x: u32,
    y: u32,
    bounds: ComplexBounds,
    canvas: CanvasSize,
) -> Complex {
    let tx = f64::from(x) / f64::from(canvas.width() - 1);
    let ty = f64::from(y) / f64::from(canvas.height() - 1);

    Complex {
        real: lerp(bounds.left, bounds.right, tx),
        imag: lerp(bounds.top, bounds.bottom, ty),
    }
}

// Exact at both ends: t == 0 yields `from`, t == 1 yields `to`.
#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from * (1.0 - t) + to * t
}
