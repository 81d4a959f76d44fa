//! Burning Ship escape-time fractal.
//!
//! Each pass folds the iterate into one quadrant before squaring:
//! `z <- (|Re z| - i|Im z|)^2 + c`. A pixel counts every step whose result
//! stays strictly inside radius 2.

pub mod colour_map;
pub mod config;
pub mod engine;
pub mod errors;
pub mod step;
