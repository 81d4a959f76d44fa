use crate::core::data::point::Point;
use thiserror::Error;

pub const MIN_CANVAS_DIMENSION: u32 = 2;
pub const DEFAULT_CANVAS_WIDTH: u32 = 720;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 480;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CanvasSizeError {
    #[error("canvas must be at least 2x2 pixels: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Fixed pixel dimensions of the drawing surface.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CanvasSize {
    width: u32,
    height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasSizeError> {
        if width < MIN_CANVAS_DIMENSION || height < MIN_CANVAS_DIMENSION {
            return Err(CanvasSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Number of pixels on the canvas.
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major buffer index of pixel `(x, y)`: `y * width + x`.
    #[must_use]
    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Inverse of [`CanvasSize::index`].
    #[must_use]
    pub fn position(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index % width) as u32, (index / width) as u32)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < i64::from(self.width)
            && (point.y as i64) < i64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_size_new_valid() {
        let canvas = CanvasSize::new(720, 480).unwrap();

        assert_eq!(canvas.width(), 720);
        assert_eq!(canvas.height(), 480);
        assert_eq!(canvas.pixel_count(), 345_600);
    }

    #[test]
    fn test_canvas_must_be_at_least_two_pixels_wide_and_tall() {
        assert_eq!(
            CanvasSize::new(1, 1),
            Err(CanvasSizeError::InvalidSize {
                width: 1,
                height: 1
            })
        );
        assert_eq!(
            CanvasSize::new(10, 1),
            Err(CanvasSizeError::InvalidSize {
                width: 10,
                height: 1
            })
        );
        assert_eq!(
            CanvasSize::new(0, 10),
            Err(CanvasSizeError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert!(CanvasSize::new(2, 2).is_ok());
    }

    #[test]
    fn test_default_canvas_is_720_by_480() {
        let canvas = CanvasSize::default();

        assert_eq!(canvas, CanvasSize::new(720, 480).unwrap());
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(CanvasSize::new(720, 480).unwrap().aspect_ratio(), 1.5);
        assert_eq!(CanvasSize::new(4, 4).unwrap().aspect_ratio(), 1.0);
    }

    #[test]
    fn test_index_is_row_major() {
        let canvas = CanvasSize::new(5, 3).unwrap();

        assert_eq!(canvas.index(0, 0), 0);
        assert_eq!(canvas.index(4, 0), 4);
        assert_eq!(canvas.index(0, 1), 5);
        assert_eq!(canvas.index(4, 2), 14);
    }

    #[test]
    fn test_position_inverts_index() {
        let canvas = CanvasSize::new(5, 3).unwrap();

        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(canvas.position(canvas.index(x, y)), (x, y));
            }
        }
    }

    #[test]
    fn test_canvas_contains_point() {
        let canvas = CanvasSize::new(100, 50).unwrap();

        assert!(canvas.contains_point(Point { x: 0, y: 0 }));
        assert!(canvas.contains_point(Point { x: 99, y: 49 }));
        assert!(!canvas.contains_point(Point { x: 100, y: 10 }));
        assert!(!canvas.contains_point(Point { x: 10, y: 50 }));
        assert!(!canvas.contains_point(Point { x: -1, y: 10 }));
        assert!(!canvas.contains_point(Point { x: 10, y: -1 }));
    }

    #[test]
    fn test_invalid_size_message() {
        let err = CanvasSize::new(1, 480).unwrap_err();

        assert_eq!(
            err.to_string(),
            "canvas must be at least 2x2 pixels: 1x480"
        );
    }
}
