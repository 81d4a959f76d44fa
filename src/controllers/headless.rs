use std::time::{Duration, Instant};

use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer,
};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::burning_ship::colour_map::GrayscaleBands;
use crate::core::fractals::burning_ship::config::BurningShipConfig;
use crate::core::fractals::burning_ship::engine::FractalEngine;
use crate::core::fractals::burning_ship::errors::EngineError;
use crate::core::viewport::view_state::ViewState;

/// Renders frames synchronously on the calling thread, without a window.
pub struct HeadlessController {
    engine: FractalEngine,
    colour_map: GrayscaleBands,
    buffer: Option<PixelBuffer>,
    last_render_duration: Option<Duration>,
}

impl HeadlessController {
    pub fn new(config: BurningShipConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: FractalEngine::new(config)?,
            colour_map: GrayscaleBands::new(config.max_iterations),
            buffer: None,
            last_render_duration: None,
        })
    }

    pub fn generate(&mut self, view: &ViewState) -> Result<&PixelBuffer, GeneratePixelBufferError> {
        let config = self.engine.config();

        log::info!("Rendering Burning Ship...");
        log::info!(
            "Image size: {}x{}",
            config.canvas.width(),
            config.canvas.height()
        );
        log::info!("Max iterations: {}", config.max_iterations);
        log::info!(
            "View: origin ({}, {}), zoom {}",
            view.origin.real,
            view.origin.imag,
            view.zoom.value()
        );

        let start = Instant::now();
        let counts = self.engine.generate(view);
        let bounded = counts
            .iter()
            .filter(|&&count| count == config.max_iterations)
            .count();
        let pixel_buffer = generate_pixel_buffer(counts, &self.colour_map, config.canvas)?;
        let duration = start.elapsed();

        log::info!("Duration: {:?}", duration);
        log::info!("Bounded pixels: {} of {}", bounded, config.canvas.pixel_count());

        self.last_render_duration = Some(duration);

        Ok(&*self.buffer.insert(pixel_buffer))
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}
