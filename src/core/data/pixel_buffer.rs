use crate::core::data::canvas_size::CanvasSize;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn canvas_to_buffer_size(canvas: CanvasSize) -> usize {
    canvas.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("canvas size {canvas_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        canvas_size: usize,
        buffer_size: usize,
    },
}

/// Row-major RGBA bytes, `[r, g, b, 0xFF]` per pixel.
pub type PixelBufferData = Vec<u8>;

#[derive(Debug)]
pub struct PixelBuffer {
    canvas: CanvasSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        canvas: CanvasSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let canvas_size = canvas_to_buffer_size(canvas);

        if canvas_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                canvas_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { canvas, buffer })
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}
