use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::viewport::bounds_for::bounds_for;
use crate::core::viewport::errors::ViewportError;
use crate::core::viewport::pixel_to_complex::pixel_to_complex;
use crate::core::viewport::zoom::Zoom;

/// Origin that keeps the point under `cursor` fixed when the zoom changes
/// from `old_zoom` to `new_zoom`.
///
/// The anchored point `p` is sampled with the old bounds. Its offset from the
/// origin, measured in pixels, scales by `new_zoom / old_zoom`, so the origin
/// moves towards `p` by the fraction `(new_zoom - old_zoom) / new_zoom`.
pub fn recenter_on_zoom(
    old_origin: Complex,
    old_zoom: Zoom,
    new_zoom: Zoom,
    cursor: Point,
    canvas: CanvasSize,
) -> Result<Complex, ViewportError> {
    let old_bounds = bounds_for(old_origin, old_zoom, canvas.aspect_ratio());
    let anchor = pixel_to_complex(cursor, old_bounds, canvas)?;
    let factor = (new_zoom.value() - old_zoom.value()) / new_zoom.value();

    Ok(old_origin + (anchor - old_origin).scale(factor))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(actual: Complex, expected: Complex, tolerance: f64) {
        assert!(
            (actual.real - expected.real).abs() <= tolerance
                && (actual.imag - expected.imag).abs() <= tolerance,
            "{actual:?} is not within {tolerance} of {expected:?}"
        );
    }

    fn anchor_after(
        origin: Complex,
        old_zoom: Zoom,
        new_zoom: Zoom,
        cursor: Point,
        canvas: CanvasSize,
    ) -> (Complex, Complex) {
        let before = pixel_to_complex(
            cursor,
            bounds_for(origin, old_zoom, canvas.aspect_ratio()),
            canvas,
        )
        .unwrap();

        let new_origin = recenter_on_zoom(origin, old_zoom, new_zoom, cursor, canvas).unwrap();

        let after = pixel_to_complex(
            cursor,
            bounds_for(new_origin, new_zoom, canvas.aspect_ratio()),
            canvas,
        )
        .unwrap();

        (before, after)
    }

    #[test]
    fn test_cursor_point_stays_fixed_when_zooming_in() {
        let canvas = CanvasSize::new(720, 480).unwrap();
        let old_zoom = Zoom::DEFAULT;
        let new_zoom = old_zoom.zoom_in();

        for cursor in [
            Point { x: 0, y: 0 },
            Point { x: 100, y: 400 },
            Point { x: 719, y: 479 },
            Point { x: 360, y: 12 },
        ] {
            let (before, after) =
                anchor_after(Complex::ZERO, old_zoom, new_zoom, cursor, canvas);
            assert_close(after, before, TOLERANCE);
        }
    }

    #[test]
    fn test_cursor_point_stays_fixed_when_zooming_out() {
        let canvas = CanvasSize::new(720, 480).unwrap();
        let origin = Complex {
            real: -1.75,
            imag: -0.03,
        };
        let old_zoom = Zoom::new(30.0).unwrap();
        let new_zoom = old_zoom.zoom_out();

        let (before, after) =
            anchor_after(origin, old_zoom, new_zoom, Point { x: 50, y: 420 }, canvas);

        assert_close(after, before, TOLERANCE);
    }

    #[test]
    fn test_anchor_holds_over_many_steps() {
        let canvas = CanvasSize::new(720, 480).unwrap();
        let cursor = Point { x: 200, y: 150 };
        let mut origin = Complex::ZERO;
        let mut zoom = Zoom::DEFAULT;

        let anchor = pixel_to_complex(
            cursor,
            bounds_for(origin, zoom, canvas.aspect_ratio()),
            canvas,
        )
        .unwrap();

        for _ in 0..50 {
            let next = zoom.zoom_in();
            origin = recenter_on_zoom(origin, zoom, next, cursor, canvas).unwrap();
            zoom = next;
        }

        let after = pixel_to_complex(
            cursor,
            bounds_for(origin, zoom, canvas.aspect_ratio()),
            canvas,
        )
        .unwrap();

        assert_close(after, anchor, 1e-10);
    }

    #[test]
    fn test_unchanged_zoom_keeps_origin() {
        let canvas = CanvasSize::new(720, 480).unwrap();
        let origin = Complex {
            real: 0.5,
            imag: -0.25,
        };
        let zoom = Zoom::new(3.0).unwrap();

        let result = recenter_on_zoom(origin, zoom, zoom, Point { x: 10, y: 10 }, canvas);

        assert_eq!(result, Ok(origin));
    }

    #[test]
    fn test_cursor_at_centre_keeps_origin() {
        let canvas = CanvasSize::new(101, 51).unwrap();

        let result = recenter_on_zoom(
            Complex::ZERO,
            Zoom::DEFAULT,
            Zoom::DEFAULT.zoom_in(),
            Point { x: 50, y: 25 },
            canvas,
        );

        assert_eq!(result, Ok(Complex::ZERO));
    }

    #[test]
    fn test_cursor_outside_canvas_fails() {
        let canvas = CanvasSize::new(720, 480).unwrap();
        let cursor = Point { x: 720, y: 0 };

        let result = recenter_on_zoom(
            Complex::ZERO,
            Zoom::DEFAULT,
            Zoom::DEFAULT.zoom_in(),
            cursor,
            canvas,
        );

        assert_eq!(
            result,
            Err(ViewportError::PixelOutsideCanvas {
                pixel: cursor,
                width: 720,
                height: 480
            })
        );
    }
}
