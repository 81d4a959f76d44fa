use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("zoom must be a finite value of at least 1.0: {value}")]
    InvalidZoom { value: f64 },
    #[error(
        "pixel at x:{}, y:{} is outside the {}x{} canvas",
        .pixel.x,
        .pixel.y,
        .width,
        .height
    )]
    PixelOutsideCanvas { pixel: Point, width: u32, height: u32 },
}
