use thiserror::Error;

use crate::core::fractals::burning_ship::errors::EngineError;

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("display surface error: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to resize display surface: {0}")]
    Resize(#[from] pixels::TextureError),
    #[error("failed to start the fractal engine: {0}")]
    Engine(#[from] EngineError),
}
