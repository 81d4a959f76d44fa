use crate::core::data::colour::Colour;
use std::error::Error;

/// Converts one per-pixel value into a display colour.
pub trait ColourMap<T>: Send + Sync {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error + Send + Sync>>;

    fn display_name(&self) -> &str;
}
