use std::error::Error;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;

/// Linear grayscale banding: white for pixels that escape immediately,
/// darkening by a fixed step for every iteration survived.
///
/// The step is `255 / (max_iterations + 1)` using integer division, so large
/// budgets collapse to a single white band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayscaleBands {
    band_step: u32,
}

impl GrayscaleBands {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            band_step: 255 / max_iterations.saturating_add(1),
        }
    }

    #[must_use]
    pub fn band_step(&self) -> u32 {
        self.band_step
    }

    #[must_use]
    pub fn level(&self, count: u32) -> u8 {
        255u32.saturating_sub(count.saturating_mul(self.band_step)) as u8
    }
}

impl ColourMap<u32> for GrayscaleBands {
    fn map(&self, value: u32) -> Result<Colour, Box<dyn Error + Send + Sync>> {
        Ok(Colour::grey(self.level(value)))
    }

    fn display_name(&self) -> &str {
        "Grayscale Bands"
    }
}
