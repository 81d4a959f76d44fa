use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratePixelBufferError {
    #[error("colour map error: {0}")]
    ColourMap(Box<dyn Error + Send + Sync>),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Error type for cancelable pixel buffer generation.
///
/// Keeps cancellation apart from real failures so callers can drop it
/// silently.
#[derive(Debug, Error)]
pub enum GeneratePixelBufferCancelableError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(Box<dyn Error + Send + Sync>),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Generates an RGBA pixel buffer by mapping row-major input values to
/// colours.
///
/// For cancel-aware generation, use [`generate_pixel_buffer_cancelable`].
pub fn generate_pixel_buffer<T, CMap>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
{
    generate_pixel_buffer_cancelable_impl(input, mapper, canvas, &NeverCancel).map_err(|e| {
        match e {
            GeneratePixelBufferCancelableError::ColourMap(err) => {
                GeneratePixelBufferError::ColourMap(err)
            }
            GeneratePixelBufferCancelableError::PixelBuffer(err) => {
                GeneratePixelBufferError::PixelBuffer(err)
            }
            GeneratePixelBufferCancelableError::Cancelled(_) => {
                unreachable!("NeverCancel token should never signal cancellation")
            }
        }
    })
}

/// Like [`generate_pixel_buffer`], but checks `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken,
{
    generate_pixel_buffer_cancelable_impl(input, mapper, canvas, cancel)
}

fn generate_pixel_buffer_cancelable_impl<T, CMap, C>(
    input: &[T],
    mapper: &CMap,
    canvas: CanvasSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    T: Copy,
    CMap: ColourMap<T> + ?Sized,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, &value) in input.iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferCancelableError::ColourMap)?;

        buffer.extend_from_slice(&colour.to_rgba8888().to_be_bytes());
    }

    Ok(PixelBuffer::from_data(canvas, buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Ok(Colour::grey(value))
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, Box<dyn Error + Send + Sync>> {
            Err("StubColourMapError".into())
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn canvas_3x2() -> CanvasSize {
        CanvasSize::new(3, 2).unwrap()
    }

    fn expected_3x2() -> PixelBufferData {
        vec![
            1, 1, 1, 255, 2, 2, 2, 255, 3, 3, 3, 255, 4, 4, 4, 255, 5, 5, 5, 255, 6, 6, 6, 255,
        ]
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};

        let results = generate_pixel_buffer(&input, &mapper, canvas_3x2()).unwrap();

        assert_eq!(results.buffer(), &expected_3x2());
        assert_eq!(results.canvas(), canvas_3x2());
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};

        let results = generate_pixel_buffer(&input, &mapper, canvas_3x2());

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_canvas_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let canvas = CanvasSize::new(2, 2).unwrap();

        let results = generate_pixel_buffer(&input, &mapper, canvas);

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    canvas_size: 16,
                    buffer_size: 24
                }
            ))
        ));
    }

    #[test]
    fn test_cancelable_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};

        let results =
            generate_pixel_buffer_cancelable(&input, &mapper, canvas_3x2(), &NeverCancel).unwrap();

        assert_eq!(results.buffer(), &expected_3x2());
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapSuccess {};
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer_cancelable(&input, &mapper, canvas_3x2(), &cancel_token);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::Cancelled(_))
        ));
    }

    #[test]
    fn test_cancelable_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let mapper = StubColourMapFailure {};

        let result = generate_pixel_buffer_cancelable(&input, &mapper, canvas_3x2(), &NeverCancel);

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::ColourMap(_))
        ));
    }

    #[test]
    fn test_cancelable_error_displays_cancelled() {
        let err = GeneratePixelBufferCancelableError::Cancelled(Cancelled);
        assert_eq!(format!("{}", err), "operation cancelled");
    }

    #[test]
    fn test_cancelable_error_displays_colour_map_error() {
        let err = GeneratePixelBufferCancelableError::ColourMap("StubColourMapError".into());
        assert_eq!(format!("{}", err), "colour map error: StubColourMapError");
    }
}
