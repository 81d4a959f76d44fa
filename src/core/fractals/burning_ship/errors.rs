use std::collections::TryReserveError;

use crate::core::data::canvas_size::CanvasSizeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Canvas(#[from] CanvasSizeError),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid engine configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to allocate the {buffer} buffer for {pixels} pixels")]
    Allocation {
        buffer: &'static str,
        pixels: usize,
        #[source]
        source: TryReserveError,
    },
}
