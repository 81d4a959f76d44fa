use crate::core::data::canvas_size::CanvasSize;
use crate::core::fractals::burning_ship::errors::ConfigError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurningShipConfig {
    pub canvas: CanvasSize,
    pub max_iterations: u32,
}

impl Default for BurningShipConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasSize::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BurningShipConfig {
    pub fn new(canvas: CanvasSize, max_iterations: u32) -> Result<Self, ConfigError> {
        let config = Self {
            canvas,
            max_iterations,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn from_dimensions(
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, ConfigError> {
        Self::new(CanvasSize::new(width, height)?, max_iterations)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSizeError;

    #[test]
    fn test_default_config() {
        let config = BurningShipConfig::default();

        assert_eq!(config.canvas.width(), 720);
        assert_eq!(config.canvas.height(), 480);
        assert_eq!(config.max_iterations, 80);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let result = BurningShipConfig::new(CanvasSize::default(), 0);

        assert_eq!(result, Err(ConfigError::ZeroMaxIterations));
    }

    #[test]
    fn test_from_dimensions_rejects_degenerate_canvas() {
        let result = BurningShipConfig::from_dimensions(1, 480, 80);

        assert_eq!(
            result,
            Err(ConfigError::Canvas(CanvasSizeError::InvalidSize {
                width: 1,
                height: 480
            }))
        );
    }

    #[test]
    fn test_from_dimensions_valid() {
        let config = BurningShipConfig::from_dimensions(4, 4, 3).unwrap();

        assert_eq!(config.canvas.pixel_count(), 16);
        assert_eq!(config.max_iterations, 3);
    }
}
